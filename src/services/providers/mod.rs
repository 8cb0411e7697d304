/// Recommendation backend abstraction
///
/// This module decouples the session and catalog logic from the concrete HTTP
/// backend. The trait covers the two calls the backend exposes: the catalog
/// listing and the recommendation lookup.
use crate::{error::AppResult, models::Recommendation};

pub mod http;

/// Trait for recommendation backends
///
/// Implementations own their transport; callers only see typed results. Both
/// operations report failures through [`AppResult`] — policy (fail-soft vs.
/// user-visible) is decided by the caller, not here.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Fetch the full list of selectable movie titles
    ///
    /// Returns the titles in backend order. Order matters: the searchable
    /// select displays options in this sequence.
    async fn list_movies(&self) -> AppResult<Vec<String>>;

    /// Fetch recommendations similar to the given movie title
    ///
    /// An empty list is a valid outcome (no similar movies found). Any
    /// response that does not decode to recommendation records — including
    /// the backend's legacy convention of answering 200 with an array of
    /// error strings — must surface as an `Err`, never as a result list.
    async fn recommend(&self, movie: &str) -> AppResult<Vec<Recommendation>>;
}

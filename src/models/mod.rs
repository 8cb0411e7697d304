use serde::{Deserialize, Serialize};

/// Placeholder artwork used when the backend has no poster for a title.
///
/// Result items must always carry a renderable image reference, so a missing
/// poster resolves to this fixed URL rather than an empty slot.
pub const FALLBACK_POSTER_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/14/No_Image_Available.jpg";

/// A selectable entry in the movie catalog
///
/// Titles are their own identifiers in this system — there is no separate id
/// space — so `value` and `label` always hold the same string. `value` is the
/// request key sent to the backend, `label` the display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieOption {
    pub value: String,
    pub label: String,
}

impl From<String> for MovieOption {
    fn from(title: String) -> Self {
        Self {
            value: title.clone(),
            label: title,
        }
    }
}

/// A single recommended movie returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    /// Poster image URL; absent or `null` when the backend found no artwork
    #[serde(default)]
    pub poster: Option<String>,
}

impl Recommendation {
    /// Image reference for rendering: the poster, or the fixed placeholder
    /// when the backend provided none.
    pub fn poster_url(&self) -> &str {
        self.poster.as_deref().unwrap_or(FALLBACK_POSTER_URL)
    }
}

/// Response body of `POST /recommend`
///
/// The backend answers with either a list of recommendation records or, under
/// its legacy error convention, a list of plain strings (e.g.
/// `["Movie not found"]`). Only the record shape is a valid result list; the
/// string shape must be surfaced as a failure by the caller, never rendered
/// as movies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Records(Vec<Recommendation>),
    ErrorStrings(Vec<String>),
}

/// Lifecycle phase of a recommendation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No submission has happened yet
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The latest request resolved with a (possibly empty) result list
    Success,
    /// The latest request failed
    Failure,
}

/// Observable state of a recommendation session
///
/// Owned exclusively by [`RecommendationSession`](crate::services::session::RecommendationSession)
/// and exposed read-only to the rendering layer. The phase tag keeps invalid
/// combinations unrepresentable in practice: `results` is non-empty only in
/// `Success`, `error_message` is set only in `Failure`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Title chosen in the selection control; cleared only by explicit reset
    pub selected_title: Option<String>,
    pub phase: Phase,
    pub results: Vec<Recommendation>,
    pub error_message: Option<String>,
}

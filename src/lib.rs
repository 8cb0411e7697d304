//! Client core for a movie recommendation picker.
//!
//! The crate covers the request/response lifecycle behind the page, not the
//! page itself: loading the selectable catalog once at startup, submitting a
//! recommendation request for a chosen title, and managing the
//! pending/success/failure outcome the rendering layer consumes.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use cinematch::{CatalogLoader, Config, HttpRecommendationProvider, RecommendationSession};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let provider = Arc::new(HttpRecommendationProvider::new(&config)?);
//!
//! let catalog = CatalogLoader::load(provider.as_ref()).await;
//! println!("{} titles available", catalog.options().len());
//!
//! let mut session = RecommendationSession::new(provider);
//!
//! session.select_title("Inception");
//! let state = session.recommend().await;
//! for movie in &state.results {
//!     println!("{} ({})", movie.title, movie.poster_url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{MovieOption, Phase, Recommendation, SessionState, FALLBACK_POSTER_URL};
pub use services::catalog::CatalogLoader;
pub use services::providers::http::HttpRecommendationProvider;
pub use services::providers::RecommendationProvider;
pub use services::session::{
    PendingRecommendation, RecommendationSession, RECOMMENDATION_FAILED_MESSAGE,
};

/// Recommendation session lifecycle
///
/// Owns the user's current selection and the state of a single logical
/// recommendation request. The rendering layer reads [`SessionState`] and
/// drives the session through three operations: `select_title`, `submit`
/// and `complete` (or the all-in-one `recommend`).
///
/// Concurrency model: one submission is meaningful at a time. Each `submit`
/// bumps a generation counter and the response is applied only if its
/// generation is still current, so a slow stale response can never clobber
/// the result of a newer submission (last-submission-wins). There is no
/// network-level cancellation — stale responses are simply discarded.
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{Phase, Recommendation, SessionState};
use crate::services::providers::RecommendationProvider;

/// User-visible message for any failed recommendation request
///
/// Network failures, non-2xx responses and malformed payloads all collapse
/// into this one string; the underlying cause goes to the log.
pub const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Failed to fetch recommendations. Please try again.";

type RecommendFuture = Pin<Box<dyn Future<Output = AppResult<Vec<Recommendation>>> + Send>>;

/// An in-flight submission handed back by [`RecommendationSession::submit`]
///
/// Carries the generation of the submission and the provider call for the
/// selected title. The caller awaits `resolve` and feeds the outcome back
/// through [`RecommendationSession::complete`].
pub struct PendingRecommendation {
    generation: u64,
    request: RecommendFuture,
}

impl PendingRecommendation {
    /// Generation of the submission this request belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Awaits the backend call, yielding the generation and the outcome
    pub async fn resolve(self) -> (u64, AppResult<Vec<Recommendation>>) {
        let outcome = self.request.await;
        (self.generation, outcome)
    }
}

/// State machine for the title-selection / recommendation flow
pub struct RecommendationSession {
    provider: Arc<dyn RecommendationProvider>,
    state: SessionState,
    generation: u64,
}

impl RecommendationSession {
    /// Creates an idle session backed by the given provider
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self {
            provider,
            state: SessionState::default(),
            generation: 0,
        }
    }

    /// Read-only view of the session for rendering
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Records the user's title choice
    ///
    /// Never fires a request and never changes the phase; results of a prior
    /// submission stay on screen until the next submit.
    pub fn select_title(&mut self, title: impl Into<String>) {
        self.state.selected_title = Some(title.into());
    }

    /// Starts a new recommendation request for the selected title
    ///
    /// Returns `None` without any state change when no title is selected.
    /// Otherwise the session synchronously enters `Pending` — prior results
    /// and error cleared — and the returned [`PendingRecommendation`] holds
    /// the backend call for the caller to drive. Submitting while a request
    /// is already pending supersedes it: the older response will arrive with
    /// a stale generation and be discarded.
    pub fn submit(&mut self) -> Option<PendingRecommendation> {
        let title = match self.state.selected_title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return None,
        };

        self.generation += 1;
        self.state.phase = Phase::Pending;
        self.state.results.clear();
        self.state.error_message = None;

        tracing::debug!(generation = self.generation, movie = %title, "Submitting recommendation request");

        let provider = Arc::clone(&self.provider);
        Some(PendingRecommendation {
            generation: self.generation,
            request: Box::pin(async move { provider.recommend(&title).await }),
        })
    }

    /// Applies the outcome of a resolved submission
    ///
    /// Returns `true` if the outcome was applied. A response whose generation
    /// is no longer current, or one arriving after the current submission has
    /// already settled, is discarded with no observable state change. On
    /// failure the selection is kept so the user can resubmit immediately.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: AppResult<Vec<Recommendation>>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale_generation = generation,
                current_generation = self.generation,
                "Discarding stale recommendation response"
            );
            return false;
        }
        if self.state.phase != Phase::Pending {
            tracing::debug!(generation, "Ignoring response for an already-settled submission");
            return false;
        }

        match outcome {
            Ok(results) => {
                tracing::info!(generation, count = results.len(), "Recommendations ready");
                self.state.phase = Phase::Success;
                self.state.results = results;
            }
            Err(e) => {
                tracing::error!(generation, error = %e, "Recommendation request failed");
                self.state.phase = Phase::Failure;
                self.state.results = Vec::new();
                self.state.error_message = Some(RECOMMENDATION_FAILED_MESSAGE.to_string());
            }
        }

        true
    }

    /// Submits and drives the request to completion in one call
    ///
    /// Convenience for hosts that run submissions sequentially. With no title
    /// selected this is a no-op, matching `submit`.
    pub async fn recommend(&mut self) -> &SessionState {
        if let Some(pending) = self.submit() {
            let (generation, outcome) = pending.resolve().await;
            self.complete(generation, outcome);
        }
        &self.state
    }

    /// Explicit reset back to a fresh idle session
    ///
    /// The only operation that clears the selection. The generation counter
    /// keeps counting so a response from before the reset stays stale.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }
}

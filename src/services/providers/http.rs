/// HTTP recommendation backend
///
/// Talks to the backend service over its two JSON endpoints:
/// 1. Catalog: `GET /movies` → array of title strings
/// 2. Recommendations: `POST /recommend` with `{"movie": <title>}` → array of
///    `{title, poster}` records
///
/// Every recommendation request carries a fresh `x-request-id` header so a
/// slow or failed call can be correlated with backend logs.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Recommendation, RecommendResponse},
    services::providers::RecommendationProvider,
};
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// HTTP header name for request correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    movie: &'a str,
}

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationProvider {
    /// Creates a provider for the configured backend
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this provider targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn list_movies(&self) -> AppResult<Vec<String>> {
        let url = format!("{}/movies", self.base_url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog endpoint returned status {}: {}",
                status, body
            )));
        }

        let titles: Vec<String> = response.json().await?;

        tracing::info!(count = titles.len(), "Fetched movie catalog");

        Ok(titles)
    }

    async fn recommend(&self, movie: &str) -> AppResult<Vec<Recommendation>> {
        if movie.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Movie title cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/recommend", self.base_url);
        let request_id = Uuid::new_v4();

        tracing::debug!(movie = %movie, request_id = %request_id, "Requesting recommendations");

        let response = self
            .http_client
            .post(&url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(&RecommendRequest { movie })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommend endpoint returned status {}: {}",
                status, body
            )));
        }

        match response.json::<RecommendResponse>().await? {
            RecommendResponse::Records(records) => {
                tracing::info!(
                    movie = %movie,
                    request_id = %request_id,
                    count = records.len(),
                    "Fetched recommendations"
                );
                Ok(records)
            }
            // Legacy backend convention: a 200 whose body is an array of
            // plain strings carries an error message, not movies.
            RecommendResponse::ErrorStrings(messages) => {
                tracing::warn!(
                    movie = %movie,
                    request_id = %request_id,
                    messages = ?messages,
                    "Backend answered 200 with an error-string payload"
                );
                Err(AppError::ExternalApi(messages.join("; ")))
            }
        }
    }
}

use crate::{
    models::MovieOption,
    services::providers::RecommendationProvider,
};

/// Selectable movie catalog, fetched once at startup
///
/// Wraps the one catalog request a page makes and the fail-soft policy around
/// it: if the backend call or decoding fails, the failure is logged and the
/// loader holds an empty option list. The selection control then degrades to
/// "no options" instead of blocking the rest of the page.
pub struct CatalogLoader {
    options: Vec<MovieOption>,
}

impl CatalogLoader {
    /// Fetches the catalog and maps each title to a selectable option
    ///
    /// Invoked exactly once per loader lifetime; there is no re-fetch or
    /// manual refresh. Backend order is preserved and duplicates are kept
    /// as received.
    pub async fn load(provider: &dyn RecommendationProvider) -> Self {
        let options = match provider.list_movies().await {
            Ok(titles) => titles.into_iter().map(MovieOption::from).collect(),
            Err(e) => {
                tracing::error!(error = %e, "Catalog load failed, continuing with empty options");
                Vec::new()
            }
        };

        Self { options }
    }

    /// Options for the selection control, in backend order
    pub fn options(&self) -> &[MovieOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockRecommendationProvider;

    #[test]
    fn test_load_maps_titles_in_order() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_list_movies().times(1).returning(|| {
            Ok(vec!["Inception".to_string(), "The Matrix".to_string()])
        });

        let catalog = tokio_test::block_on(CatalogLoader::load(&provider));

        let options = catalog.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "Inception");
        assert_eq!(options[0].label, "Inception");
        assert_eq!(options[1].value, "The Matrix");
        assert_eq!(options[1].label, "The Matrix");
    }

    #[test]
    fn test_load_keeps_duplicates() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_list_movies().times(1).returning(|| {
            Ok(vec!["Solaris".to_string(), "Solaris".to_string()])
        });

        let catalog = tokio_test::block_on(CatalogLoader::load(&provider));
        assert_eq!(catalog.options().len(), 2);
    }

    #[test]
    fn test_load_failure_yields_empty_options() {
        let mut provider = MockRecommendationProvider::new();
        provider.expect_list_movies().times(1).returning(|| {
            Err(AppError::ExternalApi("connection refused".to_string()))
        });

        let catalog = tokio_test::block_on(CatalogLoader::load(&provider));
        assert!(catalog.is_empty());
        assert!(catalog.options().is_empty());
    }
}

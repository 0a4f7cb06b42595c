//! Settings for reaching the catalog API.

/// Endpoint of the Google Books volumes search.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Results requested per search.
pub const MAX_RESULTS: u8 = 10;

/// Where and how the catalog is queried.
///
/// The API credential is only ever supplied at runtime (see the `--api-key` option of the
/// binary), never embedded in the request code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Search endpoint the query parameters are appended to.
    pub base_url: String,
    /// Optional API key sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// Upper bound of results requested per search.
    pub max_results: u8,
}

impl CatalogConfig {
    /// Replaces the API key, ignoring blank values.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Replaces the search endpoint.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_BOOKS_URL.to_owned(),
            api_key: None,
            max_results: MAX_RESULTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogConfig;

    #[test]
    fn blank_api_key_is_dropped() {
        let config = CatalogConfig::default().with_api_key(Some("  ".to_owned()));
        assert_eq!(None, config.api_key);

        let config = CatalogConfig::default().with_api_key(Some("secret".to_owned()));
        assert_eq!(Some("secret"), config.api_key.as_deref());
    }
}

//! Static configuration of the content backend connection.

const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Connection parameters for the content backend.
///
/// These are static for the storefront (baked into the view crate). The API
/// host override exists so tests can point the client at a local stub
/// instead of the hosted endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    project_id: String,
    dataset: String,
    use_cdn: bool,
    api_version: String,
    api_host: Option<String>,
}

impl ContentConfig {
    /// Configuration for a project/dataset pair, reading through the CDN
    /// edge by default.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            use_cdn: true,
            api_version: DEFAULT_API_VERSION.to_string(),
            api_host: None,
        }
    }

    /// Route reads through the CDN edge (`true`) or the live API (`false`).
    pub fn with_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Point the client at an explicit host (scheme + authority) instead of
    /// the hosted endpoint. Used by tests.
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// URL of the query endpoint for this dataset.
    pub fn query_endpoint(&self) -> String {
        let base = match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let subdomain = if self.use_cdn { "apicdn" } else { "api" };
                format!("https://{}.{}.sanity.io", self.project_id, subdomain)
            }
        };
        format!(
            "{}/v{}/data/query/{}",
            base, self.api_version, self.dataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_reads_use_the_cdn_host() {
        let config = ContentConfig::new("cturxqmc", "production");
        assert_eq!(
            config.query_endpoint(),
            "https://cturxqmc.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn disabling_cdn_targets_the_live_api_host() {
        let config = ContentConfig::new("cturxqmc", "production").with_cdn(false);
        assert_eq!(
            config.query_endpoint(),
            "https://cturxqmc.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn api_host_override_replaces_the_hosted_base() {
        let config = ContentConfig::new("cturxqmc", "production")
            .with_api_host("http://127.0.0.1:8081/");
        assert_eq!(
            config.query_endpoint(),
            "http://127.0.0.1:8081/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn api_version_is_overridable() {
        let config = ContentConfig::new("p", "d").with_api_version("2021-10-21");
        assert!(config.query_endpoint().contains("/v2021-10-21/"));
    }
}

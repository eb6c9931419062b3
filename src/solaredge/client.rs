use crate::config::SolarEdgeConfig;
use crate::error::UpstreamError;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

/// Thin typed client for the monitoring API.
///
/// Appends the account API key to every request and decodes JSON bodies
/// into the caller's response type.
pub struct Client {
    http_client: HttpClient,
    config: SolarEdgeConfig,
}

impl Client {
    pub fn new(config: SolarEdgeConfig) -> Self {
        let http_client = HttpClient::new();
        Self {
            http_client,
            config,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.config.api_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::server_error(status, body));
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::malformed(path, e))
    }
}

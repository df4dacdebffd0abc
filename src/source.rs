// Source client: the single network boundary. One GET, one attempt, bounded
// timeout. All days of a run share the one fetched document.

use std::time::Duration;

use crate::error::RunError;
use crate::models::StatisticsDocument;

#[derive(Debug)]
pub struct SourceClient {
    client: reqwest::Client,
    api_url: String,
}

impl SourceClient {
    /// Build a client for `api_url`. The URL scheme is checked here, before
    /// any network call; a bad scheme is a configuration error.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, RunError> {
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(RunError::config(anyhow::anyhow!(
                "api_url must start with http:// or https://, got {:?}",
                api_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RunError::Fetch)?;
        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// Fetch and decode the full statistics document. Transport failures and
    /// non-2xx statuses are fetch errors; a body that is not valid JSON is a
    /// decode error. Both are fatal to the run - there is no partial fetch.
    pub async fn fetch(&self) -> Result<StatisticsDocument, RunError> {
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(RunError::Fetch)?;
        let body = response.text().await.map_err(RunError::Fetch)?;
        serde_json::from_str(&body).map_err(RunError::Decode)
    }
}

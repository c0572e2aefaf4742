use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::shared::AppError;

/// Default third-party endpoint relayed by GET /data
pub const DEFAULT_DATA_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Default bound on the outbound request, the only suspension point in the
/// system that waits on an external party
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the third-party data endpoint.
///
/// A single attempt with a bounded timeout; any failure (connect error,
/// timeout, non-2xx status, undecodable body) surfaces as
/// `AppError::Upstream`, which the response layer turns into a generic
/// 500 while the real cause goes to the logs.
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetches the upstream JSON body. No retries.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request to {} failed: {e}", self.url)))?;

        let response = response
            .error_for_status()
            .map_err(|e| AppError::Upstream(format!("upstream returned error status: {e}")))?;

        debug!(url = %self.url, "Upstream fetch succeeded");

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Upstream(format!("failed to decode upstream body: {e}")))
    }
}

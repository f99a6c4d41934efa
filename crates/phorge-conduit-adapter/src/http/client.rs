/*
[INPUT]:  HTTP configuration (tracker origin, API token, timeouts) and a capability table
[OUTPUT]: Configured reqwest client executing Conduit method calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing call encoding
*/

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

use crate::http::capabilities::Capabilities;
use crate::http::error::{ConduitError, Result};
use crate::types::ConduitEnvelope;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Upper bound on pages fetched by one paginated call
    pub max_pages: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_pages: 1000,
        }
    }
}

/// Client for a Phorge/Phabricator Conduit API
#[derive(Debug)]
pub struct ConduitClient {
    http: Client,
    base_url: Url,
    token: String,
    capabilities: Capabilities,
    max_pages: u32,
}

impl ConduitClient {
    /// Create a client with default configuration and the standard method table
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Self::with_config(
            base_url,
            token,
            ClientConfig::default(),
            Capabilities::standard(),
        )
    }

    /// Create a client with custom configuration and capability table
    pub fn with_config(
        base_url: &str,
        token: impl Into<String>,
        config: ClientConfig,
        capabilities: Capabilities,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            token: token.into(),
            capabilities,
            max_pages: config.max_pages,
        })
    }

    /// The method table this client validates calls against
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub(crate) fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Build the full URL for a Conduit method
    fn api_url(&self, method: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("api/{method}"))?)
    }

    /// Execute one Conduit method call and decode the result envelope.
    ///
    /// `params` must be a JSON object; the API token is injected under the
    /// `__conduit__` key before the body is form-encoded.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, mut params: Value) -> Result<T> {
        if self.capabilities.spec(method).is_none() {
            return Err(ConduitError::UnknownMethod {
                method: method.to_string(),
            });
        }

        let Value::Object(map) = &mut params else {
            return Err(ConduitError::InvalidRequest(format!(
                "{method}: params must be a JSON object"
            )));
        };
        map.insert("__conduit__".to_string(), json!({ "token": self.token }));

        let url = self.api_url(method)?;
        let form = [
            ("params", serde_json::to_string(&params)?),
            ("output", "json".to_string()),
            ("__conduit__", "1".to_string()),
        ];

        let response = self.http.post(url).form(&form).send().await?;
        let envelope: ConduitEnvelope<T> = response.json().await?;
        decode_envelope(method, envelope)
    }
}

fn decode_envelope<T>(method: &str, envelope: ConduitEnvelope<T>) -> Result<T> {
    if let Some(code) = envelope.error_code {
        return Err(ConduitError::Api {
            code,
            info: envelope.error_info.unwrap_or_default(),
        });
    }
    envelope.result.ok_or_else(|| {
        ConduitError::InvalidResponse(format!("{method}: missing result payload"))
    })
}

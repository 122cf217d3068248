use crate::domain::model::AvailabilityStatus;
use crate::domain::ports::AvailabilityOracle;
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct AvailabilityRequest<'a> {
    domain: &'a str,
}

// 服務端以 `name` 欄位回傳 "available" / "unavailable"
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    name: String,
}

/// Availability oracle reached over HTTP: `POST {endpoint}` with
/// `{"domain": ...}`, answered by `{"name": "available" | "unavailable"}`.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    client: Client,
    endpoint: String,
}

impl HttpOracle {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_options(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
        headers: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut builder = Client::builder().default_headers(build_headers(headers)?);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            CartError::InvalidConfigValueError {
                field: "oracle.headers".to_string(),
                value: key.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| CartError::InvalidConfigValueError {
            field: format!("oracle.headers.{}", key),
            value: value.clone(),
            reason: format!("Invalid header value: {}", e),
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl AvailabilityOracle for HttpOracle {
    async fn check(&self, domain: &str) -> Result<AvailabilityStatus> {
        tracing::debug!("Making availability request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AvailabilityRequest { domain })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Availability response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CartError::OracleStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: AvailabilityResponse =
            serde_json::from_str(&body).map_err(|e| CartError::MalformedResponse {
                message: format!("invalid JSON body: {}", e),
            })?;

        parsed
            .name
            .parse::<AvailabilityStatus>()
            .map_err(|message| CartError::MalformedResponse { message })
    }
}

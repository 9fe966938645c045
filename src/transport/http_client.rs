/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::transport::Transport;
use crate::utils::id::request_id;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// JSON-over-HTTPS transport for the EMS gateway
///
/// Every call is a `POST {base_url}/{endpoint}` with the payload as body and
/// a fresh `X-Request-Id` header. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport from the client configuration
    ///
    /// # Returns
    /// * `Ok(HttpTransport)` - Ready to dispatch
    /// * `Err(AppError::Network)` - If the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.rest_api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, endpoint: &str, payload: &Value) -> Result<Value, AppError> {
        let url = self.url_for(endpoint);
        let request_id = request_id();
        debug!("POST {} [{}]", url, request_id);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8")
            .header("X-Request-Id", request_id.as_str())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {} [{}]", status, request_id);

        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => {
                error!("Unauthorized [{}]: {}", request_id, body);
                Err(AppError::Unauthorized)
            }
            _ => {
                error!(
                    "Request failed with status {} [{}]: {}",
                    status, request_id, body
                );
                Err(AppError::Unexpected(status))
            }
        }
    }
}

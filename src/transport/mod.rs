/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Delivery of serialized requests to the gateway.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP transport backed by `reqwest`
pub mod http_client;

pub use http_client::HttpTransport;

#[async_trait]
/// Sends a serialized request and returns the raw answer
///
/// Implementations own connection handling, TLS and any retry policy; the
/// payload they receive is already validated and bound to a session.
pub trait Transport: Send + Sync {
    /// Delivers `payload` to `endpoint` and returns the decoded JSON answer
    async fn dispatch(&self, endpoint: &str, payload: &Value) -> Result<Value, AppError>;
}

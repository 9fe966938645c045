/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use crate::presentation::order::{OrderStatus, OrderStatusDetails};
use crate::presentation::position::Position;
use crate::presentation::serialization::null_as_default;
use crate::session::token::SessionToken;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome reported in every gateway response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// The call succeeded
    Success,
    /// The call failed; see the messages
    Error,
    /// The order needs to be reviewed before it is placed
    ReviewOrder,
    /// The broker needs more information, e.g. a security question
    InformationNeeded,
    /// A status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

/// Fields common to every gateway response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Outcome of the call
    #[serde(default)]
    pub status: ResponseStatus,
    /// Session token echoed by the gateway; a blank one reads as absent
    #[serde(
        default,
        deserialize_with = "blank_token_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<SessionToken>,
    /// Short human readable message
    #[serde(default)]
    pub short_message: Option<String>,
    /// Detailed messages
    #[serde(default, deserialize_with = "null_as_default")]
    pub long_messages: Vec<String>,
    /// Broker error code
    #[serde(default)]
    pub code: Option<i64>,
}

fn blank_token_as_none<'de, D>(deserializer: D) -> Result<Option<SessionToken>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|token| SessionToken::new(token).ok()))
}

/// A typed gateway response
pub trait TradeItResponse: DeserializeOwned {
    /// Fields common to every response
    fn envelope(&self) -> &ResponseEnvelope;

    /// Whether the gateway reported success
    fn is_success(&self) -> bool {
        self.envelope().status == ResponseStatus::Success
    }
}

/// Interprets a raw gateway answer as the typed result `R`
///
/// # Returns
/// * `Ok(R)` - For any status other than `ERROR`
/// * `Err(AppError::Broker)` - When the gateway reported `ERROR`
/// * `Err(AppError::Deserialization)` - When the body does not match `R`
pub fn parse_response<R: TradeItResponse>(value: Value) -> Result<R, AppError> {
    let envelope = ResponseEnvelope::deserialize(&value)
        .map_err(|e| AppError::Deserialization(e.to_string()))?;

    if envelope.status == ResponseStatus::Error {
        warn!(
            "Gateway returned an error (code {:?}): {}",
            envelope.code,
            envelope.short_message.as_deref().unwrap_or_default()
        );
        return Err(AppError::Broker {
            code: envelope.code,
            short_message: envelope.short_message.unwrap_or_default(),
            long_messages: envelope.long_messages,
        });
    }

    debug!("Gateway responded with status {:?}", envelope.status);
    serde_json::from_value(value).map_err(|e| AppError::Deserialization(e.to_string()))
}

/// Positions of an account, one page at a time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPositionsResponse {
    /// Common response fields
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Positions on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<Position>,
    /// Page held by this response (1-based)
    #[serde(default)]
    pub current_page: Option<i32>,
    /// Number of pages available
    #[serde(default)]
    pub total_pages: Option<i32>,
    /// Base currency of the account
    #[serde(default)]
    pub account_base_currency: Option<String>,
}

impl GetPositionsResponse {
    /// Whether pages follow this one
    pub fn has_more_pages(&self) -> bool {
        match (self.current_page, self.total_pages) {
            (Some(current), Some(total)) => current < total,
            _ => false,
        }
    }

    /// Sum of the market values of the positions whose value is known
    pub fn total_market_value(&self) -> f64 {
        self.positions.iter().filter_map(Position::market_value).sum()
    }
}

impl TradeItResponse for GetPositionsResponse {
    fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }
}

/// Result of placing a foreign-exchange order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxOrderResponse {
    /// Common response fields
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Broker order number
    #[serde(default)]
    pub order_number: Option<String>,
    /// Status of the placed order and its group
    #[serde(default)]
    pub order_status_details: Option<OrderStatusDetails>,
}

impl FxOrderResponse {
    /// Status of the head order, if reported
    pub fn order_status(&self) -> Option<OrderStatus> {
        self.order_status_details
            .as_ref()
            .and_then(|details| details.order_status)
    }
}

impl TradeItResponse for FxOrderResponse {
    fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }
}

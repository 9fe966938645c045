//! # TradeIt Client
//!
//! Typed request and response models for the TradeIt EMS trading gateway.
//!
//! Requests are built from typed fields, validated in one pass that reports
//! every violation, bound to the current session token right before they
//! leave, and serialized into the flat JSON objects the gateway expects.
//! Answers are interpreted back into typed results, with gateway `ERROR`
//! answers surfaced as [`error::AppError::Broker`].
//!
//! ## Requests
//!
//! | Request | Endpoint | Response |
//! |---|---|---|
//! | [`model::requests::GetPositionsRequest`] | `positions/getPositions` | [`model::responses::GetPositionsResponse`] |
//! | [`model::requests::FxOrderInfoRequest`] | `order/placeFxOrder` | [`model::responses::FxOrderResponse`] |
//!
//! ## Example
//!
//! ```rust
//! use tradeit_client::prelude::*;
//!
//! let mut order = FxOrderInfoRequest::new(OrderType::Limit, OrderExpiration::GoodTillCanceled)
//!     .with_leg(FxOrderLeg::new("EUR/USD", OrderAction::Buy, 1000.0).with_rate(1.0850))
//!     .with_leg(FxOrderLeg::stop("EUR/USD", OrderAction::Sell, 1000.0, 1.0800));
//!
//! order.validate().expect("valid order");
//! order.bind_session(&SessionToken::new("session-token").unwrap());
//!
//! let payload = order.to_payload().unwrap();
//! assert_eq!(payload["orderLegs"].as_array().unwrap().len(), 2);
//! ```
//!
//! ## Configuration
//!
//! [`config::Config::new`] reads `TRADEIT_BASE_URL`, `TRADEIT_TIMEOUT` and
//! `TRADEIT_ACCOUNT_NUMBER` from the environment or a `.env` file.
//! Logging goes through `tracing`; call [`utils::logger::setup_logger`] to
//! print it, with the level taken from `LOGLEVEL`.

/// Client binding sessions to requests and dispatching them
pub mod client;
/// Client configuration
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Value objects and enums shared by requests and responses
pub mod presentation;
/// Session token handling
pub mod session;
/// Delivery of requests to the gateway
pub mod transport;
/// Configuration, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

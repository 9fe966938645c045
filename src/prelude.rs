/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # TradeIt Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use tradeit_client::prelude::*;
//!
//! let mut request = GetPositionsRequest::new("ACC123").with_page(2);
//! assert!(request.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the gateway client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, LegError, TradeItResult, ValidationError, ValidationErrors};

// ============================================================================
// SESSION
// ============================================================================

/// Session token and providers
pub use crate::session::interface::{SessionProvider, SharedSession, StaticSession};
pub use crate::session::token::SessionToken;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request contract and concrete requests
pub use crate::model::requests::{
    FxOrderInfoRequest, FxOrderLeg, GetPositionsRequest, RequestHeader, TradeItRequest,
};

/// Response contract and concrete responses
pub use crate::model::responses::{
    FxOrderResponse, GetPositionsResponse, ResponseEnvelope, ResponseStatus, TradeItResponse,
    parse_response,
};

// ============================================================================
// PRESENTATION MODELS
// ============================================================================

/// Order enums and status models
pub use crate::presentation::order::{
    OrderAction, OrderExpiration, OrderStatus, OrderStatusDetails, OrderStatusLeg, OrderType,
};

/// Position model
pub use crate::presentation::position::Position;

/// Enumerated field helpers
pub use crate::presentation::serialization::{Enumerated, WireEnum};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// Dispatching client
pub use crate::client::Client;

/// Transport trait and HTTP implementation
pub use crate::transport::{HttpTransport, Transport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Request id generation
pub use crate::utils::id::request_id;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

/// Serde traits used by the models
pub use serde::{Deserialize, Serialize};

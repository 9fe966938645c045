/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Client binding sessions to requests and dispatching them
//!
//! Every call goes through the same steps:
//! validate the request, bind the current session token, serialize,
//! hand the payload to the transport, and interpret the answer.
//!
//! # Example
//! ```ignore
//! use tradeit_client::prelude::*;
//!
//! let token = SessionToken::new("session-token")?;
//! let client = Client::from_config(&Config::new(), StaticSession::new(token))?;
//!
//! let positions = client.get_positions("ACC123").await?;
//! ```

use crate::config::Config;
use crate::constants::MAX_POSITION_PAGES;
use crate::error::AppError;
use crate::model::requests::{FxOrderInfoRequest, GetPositionsRequest, TradeItRequest};
use crate::model::responses::{FxOrderResponse, GetPositionsResponse, parse_response};
use crate::presentation::position::Position;
use crate::session::interface::SessionProvider;
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Dispatches requests to the gateway on behalf of one session
pub struct Client<S, T> {
    session: S,
    transport: T,
    default_account_number: Option<String>,
}

impl<S: SessionProvider> Client<S, HttpTransport> {
    /// Creates a client talking HTTP to the gateway described by `config`
    ///
    /// The configured default account, if any, is used by
    /// [`Client::get_default_account_positions`].
    pub fn from_config(config: &Config, session: S) -> Result<Self, AppError> {
        let client = Self::new(session, HttpTransport::new(config)?);
        Ok(match &config.default_account_number {
            Some(account) => client.with_default_account(account.clone()),
            None => client,
        })
    }
}

impl<S: SessionProvider, T: Transport> Client<S, T> {
    /// Creates a client from a session provider and a transport
    pub fn new(session: S, transport: T) -> Self {
        Self {
            session,
            transport,
            default_account_number: None,
        }
    }

    /// Sets the account used when none is passed explicitly
    pub fn with_default_account(mut self, account_number: impl Into<String>) -> Self {
        self.default_account_number = Some(account_number.into());
        self
    }

    /// The account used when none is passed explicitly
    pub fn default_account_number(&self) -> Option<&str> {
        self.default_account_number.as_deref()
    }

    /// The session provider
    pub fn session(&self) -> &S {
        &self.session
    }

    /// The transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates `request`, binds the current session token and serializes it
    ///
    /// A request failing validation is never bound nor serialized.
    ///
    /// # Returns
    /// * `Ok(Value)` - The wire payload
    /// * `Err(AppError::Validation)` - Every violated constraint
    /// * `Err(_)` - If no session token is available
    pub fn prepare<R: TradeItRequest>(&self, request: &mut R) -> Result<Value, AppError> {
        request.validate()?;
        let token = self.session.current_session_token()?;
        request.bind_session(&token);
        request.to_payload()
    }

    /// Sends `request` and returns the typed answer
    ///
    /// The request is consumed: a new call needs a new request.
    pub async fn send<R: TradeItRequest>(&self, mut request: R) -> Result<R::Response, AppError> {
        let payload = self.prepare(&mut request)?;
        debug!("Dispatching request to {}", R::ENDPOINT);
        let raw = self.transport.dispatch(R::ENDPOINT, &payload).await?;
        parse_response(raw)
    }

    /// Fetches the first page of positions of `account_number`
    pub async fn get_positions(
        &self,
        account_number: &str,
    ) -> Result<GetPositionsResponse, AppError> {
        self.send(GetPositionsRequest::new(account_number)).await
    }

    /// Fetches every position of `account_number`, following pages in order
    pub async fn get_all_positions(&self, account_number: &str) -> Result<Vec<Position>, AppError> {
        let mut request = Some(GetPositionsRequest::new(account_number));
        let mut positions = Vec::new();
        let mut pages = 0;

        while let Some(current) = request.take() {
            pages += 1;
            if pages > MAX_POSITION_PAGES {
                warn!(
                    "Stopped after {} pages of positions for account {}",
                    MAX_POSITION_PAGES, account_number
                );
                break;
            }
            let response = self.send(current.clone()).await?;
            request = current.next_page(&response);
            positions.extend(response.positions);
        }

        info!(
            "Retrieved {} positions for account {} in {} page(s)",
            positions.len(),
            account_number,
            pages.min(MAX_POSITION_PAGES)
        );
        Ok(positions)
    }

    /// Fetches every position of the default account
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If no default account is set
    pub async fn get_default_account_positions(&self) -> Result<Vec<Position>, AppError> {
        let account_number = self.default_account_number().ok_or_else(|| {
            AppError::InvalidInput("no default account number configured".to_string())
        })?;
        self.get_all_positions(account_number).await
    }

    /// Places a foreign-exchange order
    pub async fn place_fx_order(
        &self,
        order: FxOrderInfoRequest,
    ) -> Result<FxOrderResponse, AppError> {
        let legs = order.order_legs().len();
        let response = self.send(order).await?;
        info!(
            "FX order with {} leg(s) placed, order number {:?}",
            legs, response.order_number
        );
        Ok(response)
    }
}

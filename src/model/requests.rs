/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::{FIRST_PAGE, GET_POSITIONS_ENDPOINT, PLACE_FX_ORDER_ENDPOINT};
use crate::error::{AppError, LegError, ValidationError, ValidationErrors};
use crate::model::responses::{FxOrderResponse, GetPositionsResponse, TradeItResponse};
use crate::presentation::order::{OrderAction, OrderExpiration, OrderType};
use crate::presentation::serialization::{Enumerated, WireEnum, null_as_default};
use crate::session::token::SessionToken;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

/// State shared by every request: the bound session token and the validation mark
///
/// The token is only written by [`TradeItRequest::bind_session`]; a `token`
/// key in incoming JSON is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestHeader {
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    token: Option<SessionToken>,
    #[serde(skip)]
    validated: bool,
}

impl RequestHeader {
    /// The bound session token, if any
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Whether the last `validate()` succeeded and no field changed since
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    fn bind(&mut self, token: &SessionToken) {
        self.token = Some(token.clone());
    }

    fn invalidate(&mut self) {
        self.validated = false;
    }
}

/// Contract shared by every request sent to the gateway
///
/// Lifecycle: populate fields, `validate()`, `bind_session()`, `to_payload()`.
/// Any field change after validation clears the validation mark.
pub trait TradeItRequest: Serialize + Debug {
    /// Gateway path the request is posted to
    const ENDPOINT: &'static str;

    /// Typed result the gateway answers with
    type Response: TradeItResponse;

    /// Shared request state
    fn header(&self) -> &RequestHeader;

    /// Shared request state, mutably
    fn header_mut(&mut self) -> &mut RequestHeader;

    /// Every violated field constraint of this request, without side effects
    fn violations(&self) -> ValidationErrors;

    /// The bound session token, if any
    fn token(&self) -> Option<&SessionToken> {
        self.header().token()
    }

    /// Overwrites the session token unconditionally; the last call wins
    fn bind_session(&mut self, token: &SessionToken) {
        self.header_mut().bind(token);
        debug!("Session bound to {} request", Self::ENDPOINT);
    }

    /// Checks every field constraint and reports all violations at once
    fn validate(&mut self) -> Result<(), ValidationErrors> {
        let errors = self.violations();
        self.header_mut().validated = errors.is_empty();
        if !errors.is_empty() {
            warn!(
                "{} request failed validation with {} error(s): {}",
                Self::ENDPOINT,
                errors.len(),
                errors
            );
        }
        errors.into_result()
    }

    /// Whether the request may be serialized
    fn is_validated(&self) -> bool {
        self.header().is_validated()
    }

    /// Converts the request into its wire representation
    ///
    /// # Returns
    /// * `Ok(Value)` - A flat JSON object with every present field under its wire name
    /// * `Err(AppError::NotValidated)` - If `validate()` has not succeeded since the last change
    fn to_payload(&self) -> Result<Value, AppError> {
        if !self.is_validated() {
            return Err(AppError::NotValidated);
        }
        Ok(serde_json::to_value(self)?)
    }
}

fn check_enum<T: WireEnum>(
    field: &'static str,
    value: Option<&Enumerated<T>>,
    errors: &mut ValidationErrors,
) {
    match value {
        None => errors.push(ValidationError::MissingRequiredField { field }),
        Some(Enumerated::Unrecognized(raw)) => errors.push(ValidationError::InvalidEnumValue {
            field,
            value: raw.clone(),
            allowed: T::VARIANTS,
        }),
        Some(Enumerated::Known(_)) => {}
    }
}

/// Request for the positions held in one account
///
/// # Example
/// ```
/// use tradeit_client::model::requests::{GetPositionsRequest, TradeItRequest};
/// use tradeit_client::session::token::SessionToken;
///
/// let mut request = GetPositionsRequest::new("ACC123");
/// request.validate().unwrap();
/// request.bind_session(&SessionToken::new("token").unwrap());
/// let payload = request.to_payload().unwrap();
/// assert_eq!(payload["accountNumber"], "ACC123");
/// assert!(payload.get("page").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPositionsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<i32>,
    #[serde(flatten)]
    header: RequestHeader,
}

impl GetPositionsRequest {
    /// Creates a request for `account_number`, the preferred constructor
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: Some(account_number.into()),
            ..Default::default()
        }
    }

    /// Sets the page to fetch (1-based)
    pub fn with_page(mut self, page: i32) -> Self {
        self.set_page(Some(page));
        self
    }

    /// Account the positions belong to
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    /// Page to fetch; `None` lets the gateway return the first page
    pub fn page(&self) -> Option<i32> {
        self.page
    }

    /// Sets the account number
    pub fn set_account_number(&mut self, account_number: impl Into<String>) {
        self.account_number = Some(account_number.into());
        self.header.invalidate();
    }

    /// Sets or clears the page
    pub fn set_page(&mut self, page: Option<i32>) {
        self.page = page;
        self.header.invalidate();
    }

    /// Builds the request for the page after the one `response` holds
    ///
    /// Returns `None` on the last page or when the account number is unknown.
    pub fn next_page(&self, response: &GetPositionsResponse) -> Option<GetPositionsRequest> {
        if !response.has_more_pages() {
            return None;
        }
        // A page below the first one is read as the first.
        let current = response
            .current_page
            .or(self.page)
            .unwrap_or(FIRST_PAGE)
            .max(FIRST_PAGE);
        let account_number = self.account_number.clone()?;
        Some(GetPositionsRequest::new(account_number).with_page(current.saturating_add(1)))
    }
}

impl TradeItRequest for GetPositionsRequest {
    const ENDPOINT: &'static str = GET_POSITIONS_ENDPOINT;
    type Response = GetPositionsResponse;

    fn header(&self) -> &RequestHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut RequestHeader {
        &mut self.header
    }

    fn violations(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self
            .account_number
            .as_deref()
            .is_none_or(|account| account.trim().is_empty())
        {
            errors.push(ValidationError::MissingRequiredField {
                field: "accountNumber",
            });
        }
        if let Some(page) = self.page.filter(|page| *page < FIRST_PAGE) {
            errors.push(ValidationError::InvalidPage(page));
        }
        errors
    }
}

/// One leg of a foreign-exchange order
///
/// When `price_type` is absent the leg takes the `orderType` of its order.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxOrderLeg {
    /// Price type of this leg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<Enumerated<OrderType>>,
    /// Currency pair, e.g. `EUR/USD`
    #[serde(default)]
    pub pair: String,
    /// Buy or sell
    pub action: Enumerated<OrderAction>,
    /// Quantity in units of the base currency
    pub amount: f64,
    /// Limit or trigger rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl FxOrderLeg {
    /// Creates a leg that takes its price type from the order
    pub fn new(pair: impl Into<String>, action: OrderAction, amount: f64) -> Self {
        Self {
            price_type: None,
            pair: pair.into(),
            action: action.into(),
            amount,
            rate: None,
        }
    }

    /// Creates a market leg
    pub fn market(pair: impl Into<String>, action: OrderAction, amount: f64) -> Self {
        Self::new(pair, action, amount).with_price_type(OrderType::Market)
    }

    /// Creates a limit leg at `rate`
    pub fn limit(pair: impl Into<String>, action: OrderAction, amount: f64, rate: f64) -> Self {
        Self::new(pair, action, amount)
            .with_price_type(OrderType::Limit)
            .with_rate(rate)
    }

    /// Creates a stop leg triggered at `rate`
    pub fn stop(pair: impl Into<String>, action: OrderAction, amount: f64, rate: f64) -> Self {
        Self::new(pair, action, amount)
            .with_price_type(OrderType::Stop)
            .with_rate(rate)
    }

    /// Sets the leg's own price type
    pub fn with_price_type(mut self, price_type: impl Into<Enumerated<OrderType>>) -> Self {
        self.price_type = Some(price_type.into());
        self
    }

    /// Sets the rate
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Price type in force for this leg, falling back to `inherited`
    pub fn effective_price_type(&self, inherited: Option<OrderType>) -> Option<OrderType> {
        match &self.price_type {
            Some(price_type) => price_type.known(),
            None => inherited,
        }
    }

    fn violations(&self, inherited: Option<OrderType>) -> Vec<LegError> {
        let mut errors = Vec::new();

        if self.pair.trim().is_empty() {
            errors.push(LegError::MissingInstrument);
        }
        if let Enumerated::Unrecognized(raw) = &self.action {
            errors.push(LegError::InvalidEnumValue {
                field: "action",
                value: raw.clone(),
                allowed: OrderAction::VARIANTS,
            });
        }
        if !(self.amount.is_finite() && self.amount > 0.0) {
            errors.push(LegError::NonPositiveQuantity(self.amount));
        }
        if let Some(Enumerated::Unrecognized(raw)) = &self.price_type {
            errors.push(LegError::InvalidEnumValue {
                field: "priceType",
                value: raw.clone(),
                allowed: OrderType::VARIANTS,
            });
        }

        // An unknown effective type is reported elsewhere; the rate rule needs one.
        match (self.effective_price_type(inherited), self.rate) {
            (Some(OrderType::Market), Some(rate)) => errors.push(LegError::UnexpectedPrice(rate)),
            (Some(price_type), None) if price_type.requires_price() => {
                errors.push(LegError::MissingPrice)
            }
            (Some(_), Some(rate)) if !(rate.is_finite() && rate > 0.0) => {
                errors.push(LegError::InvalidPrice(rate))
            }
            _ => {}
        }

        errors
    }
}

/// Foreign-exchange order made of one or more legs
///
/// Legs are sent in insertion order, which is their execution order.
///
/// # Example
/// ```
/// use tradeit_client::model::requests::{FxOrderInfoRequest, FxOrderLeg, TradeItRequest};
/// use tradeit_client::presentation::order::{OrderAction, OrderExpiration, OrderType};
///
/// let mut order = FxOrderInfoRequest::new(OrderType::Market, OrderExpiration::Day)
///     .with_leg(FxOrderLeg::new("EUR/USD", OrderAction::Buy, 1000.0));
/// assert!(order.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxOrderInfoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order_type: Option<Enumerated<OrderType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order_expiration: Option<Enumerated<OrderExpiration>>,
    #[serde(default, deserialize_with = "null_as_default")]
    order_legs: Vec<FxOrderLeg>,
    #[serde(flatten)]
    header: RequestHeader,
}

impl FxOrderInfoRequest {
    /// Creates an order without legs
    ///
    /// Accepts typed values or raw broker literals (`"market"`, `"gtc"`).
    pub fn new(
        order_type: impl Into<Enumerated<OrderType>>,
        order_expiration: impl Into<Enumerated<OrderExpiration>>,
    ) -> Self {
        Self {
            order_type: Some(order_type.into()),
            order_expiration: Some(order_expiration.into()),
            ..Default::default()
        }
    }

    /// Appends a leg
    pub fn with_leg(mut self, leg: FxOrderLeg) -> Self {
        self.push_leg(leg);
        self
    }

    /// Order type
    pub fn order_type(&self) -> Option<&Enumerated<OrderType>> {
        self.order_type.as_ref()
    }

    /// Order expiration
    pub fn order_expiration(&self) -> Option<&Enumerated<OrderExpiration>> {
        self.order_expiration.as_ref()
    }

    /// Legs in execution order
    pub fn order_legs(&self) -> &[FxOrderLeg] {
        &self.order_legs
    }

    /// Sets the order type
    pub fn set_order_type(&mut self, order_type: impl Into<Enumerated<OrderType>>) {
        self.order_type = Some(order_type.into());
        self.header.invalidate();
    }

    /// Sets the order expiration
    pub fn set_order_expiration(
        &mut self,
        order_expiration: impl Into<Enumerated<OrderExpiration>>,
    ) {
        self.order_expiration = Some(order_expiration.into());
        self.header.invalidate();
    }

    /// Appends a leg after the existing ones
    pub fn push_leg(&mut self, leg: FxOrderLeg) {
        self.order_legs.push(leg);
        self.header.invalidate();
    }

    /// Replaces every leg
    pub fn set_order_legs(&mut self, legs: Vec<FxOrderLeg>) {
        self.order_legs = legs;
        self.header.invalidate();
    }
}

impl TradeItRequest for FxOrderInfoRequest {
    const ENDPOINT: &'static str = PLACE_FX_ORDER_ENDPOINT;
    type Response = FxOrderResponse;

    fn header(&self) -> &RequestHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut RequestHeader {
        &mut self.header
    }

    fn violations(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        check_enum("orderType", self.order_type.as_ref(), &mut errors);
        check_enum("orderExpiration", self.order_expiration.as_ref(), &mut errors);

        if self.order_legs.is_empty() {
            errors.push(ValidationError::EmptyOrderLegs);
        }

        let inherited = self.order_type.as_ref().and_then(Enumerated::known);
        for (index, leg) in self.order_legs.iter().enumerate() {
            let leg_errors = leg.violations(inherited);
            if !leg_errors.is_empty() {
                errors.push(ValidationError::InvalidLeg {
                    index,
                    errors: leg_errors,
                });
            }
        }

        errors
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::presentation::serialization::{null_as_default, wire_enum};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Price type of an order or of a single leg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Executed immediately at the current market rate
    Market,
    /// Executed at the given rate or better
    Limit,
    /// Becomes a market order once the given rate is reached
    Stop,
}

wire_enum!(OrderType {
    Market => "market",
    Limit => "limit",
    Stop => "stop",
});

impl OrderType {
    /// Whether a leg of this type must carry a `rate`
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::Stop)
    }
}

/// How long an order stays working
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderExpiration {
    /// Expires at the end of the trading day
    #[serde(rename = "day")]
    Day,
    /// Stays working until cancelled
    #[serde(rename = "gtc")]
    GoodTillCanceled,
}

wire_enum!(OrderExpiration {
    Day => "day",
    GoodTillCanceled => "gtc",
});

/// Side of an order leg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    /// Buy the base currency
    Buy,
    /// Sell the base currency
    Sell,
}

wire_enum!(OrderAction {
    Buy => "buy",
    Sell => "sell",
});

/// Lifecycle state reported by the gateway for a placed order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Received but not yet working
    Pending,
    /// Working in the market
    Open,
    /// Completely executed
    Filled,
    /// Partially executed and still working
    PartFilled,
    /// Cancellation requested
    PendingCancel,
    /// Cancelled
    Canceled,
    /// Refused by the broker
    Rejected,
    /// Expired without a complete fill
    Expired,
    /// The broker does not know the order
    NotFound,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Canceled
                | OrderStatus::Rejected
                | OrderStatus::Expired
                | OrderStatus::NotFound
        )
    }
}

/// One leg of an order as reported back by the gateway
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusLeg {
    /// Price type of the leg
    pub price_type: Option<String>,
    /// Instrument of the leg
    pub symbol: Option<String>,
    /// Side of the leg
    pub action: Option<String>,
    /// Quantity requested
    pub ordered_quantity: Option<f64>,
    /// Quantity executed so far
    pub filled_quantity: Option<f64>,
    /// Limit rate, for limit legs
    pub limit_price: Option<f64>,
    /// Trigger rate, for stop legs
    pub stop_price: Option<f64>,
}

impl OrderStatusLeg {
    /// Quantity still to be executed, when both quantities are known
    pub fn remaining_quantity(&self) -> Option<f64> {
        match (self.ordered_quantity, self.filled_quantity) {
            (Some(ordered), Some(filled)) => Some((ordered - filled).max(0.0)),
            (Some(ordered), None) => Some(ordered),
            _ => None,
        }
    }
}

/// Status of a placed order, possibly the head of a group of orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusDetails {
    /// Broker order number
    pub order_number: Option<String>,
    /// Expiration literal, as sent by the broker
    pub order_expiration: Option<String>,
    /// Order type literal, as sent by the broker
    pub order_type: Option<String>,
    /// Current state
    pub order_status: Option<OrderStatus>,
    /// Legs, in execution order
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_legs: Vec<OrderStatusLeg>,
    /// Identifier of the group this order heads
    pub group_order_id: Option<String>,
    /// Group kind (for example one-cancels-other)
    pub group_order_type: Option<String>,
    /// Orders belonging to the group
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_orders: Vec<OrderStatusDetails>,
}

impl OrderStatusDetails {
    /// This order followed by every grouped order, depth-first
    pub fn all_orders(&self) -> Vec<&OrderStatusDetails> {
        let mut orders = vec![self];
        for child in &self.group_orders {
            orders.extend(child.all_orders());
        }
        orders
    }

    /// Whether this order and every grouped order reached a terminal state
    pub fn is_settled(&self) -> bool {
        self.all_orders()
            .iter()
            .all(|order| order.order_status.is_some_and(|status| status.is_terminal()))
    }
}

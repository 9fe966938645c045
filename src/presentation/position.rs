use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A holding in a brokerage account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Instrument symbol
    pub symbol: String,
    /// Instrument class (for example `EQUITY_OR_ETF`, `FX`)
    pub symbol_class: Option<String>,
    /// `LONG` or `SHORT`
    pub holding_type: Option<String>,
    /// Total cost of the holding
    #[serde(rename = "costbasis")]
    pub cost_basis: Option<f64>,
    /// Last traded price
    pub last_price: Option<f64>,
    /// Number of units held
    pub quantity: Option<f64>,
    /// Gain or loss since the previous close
    pub today_gain_loss_absolute: Option<f64>,
    /// Gain or loss since the position was opened
    pub total_gain_loss_absolute: Option<f64>,
    /// Gain or loss since the position was opened, in percent
    pub total_gain_loss_percentage: Option<f64>,
    /// Listing exchange
    pub exchange: Option<String>,
    /// Currency the position is valued in
    pub currency: Option<String>,
}

impl Position {
    /// Quantity multiplied by the last price, when both are known
    pub fn market_value(&self) -> Option<f64> {
        Some(self.quantity? * self.last_price?)
    }

    /// Whether the position is held short
    pub fn is_short(&self) -> bool {
        self.holding_type
            .as_deref()
            .is_some_and(|holding| holding.eq_ignore_ascii_case("SHORT"))
    }
}

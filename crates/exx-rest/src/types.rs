//! Types for EXX REST API requests and responses
//!
//! Responses are typed where the exchange documents a schema. Fields the
//! exchange leaves open-ended are kept as [`serde_json::Value`], and every
//! record carries a flattened `extra` map so undocumented fields survive
//! decoding instead of failing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Convert a JSON string or number into its string form
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Listing information for one trading pair
#[derive(Debug, Clone, Deserialize)]
pub struct MarketInfo {
    /// Decimal places accepted for order amounts
    #[serde(rename = "amountScale")]
    pub amount_scale: Option<u32>,
    /// Decimal places accepted for order prices
    #[serde(rename = "priceScale")]
    pub price_scale: Option<u32>,
    /// Minimum order amount
    #[serde(rename = "minAmount")]
    pub min_amount: Option<Decimal>,
    /// Whether the pair is currently open for trading
    #[serde(rename = "isOpen")]
    pub is_open: Option<bool>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// All listed pairs, keyed by pair name (e.g. "ensa_eth")
pub type MarketsResponse = HashMap<String, MarketInfo>;

/// Ticker fields for a trading pair
#[derive(Debug, Clone, Deserialize)]
pub struct TickerData {
    /// Best bid price
    pub buy: Option<Decimal>,
    /// Best ask price
    pub sell: Option<Decimal>,
    /// Last trade price
    pub last: Option<Decimal>,
    /// 24h high
    pub high: Option<Decimal>,
    /// 24h low
    pub low: Option<Decimal>,
    /// 24h volume
    pub vol: Option<Decimal>,
    /// 24h price change rate
    #[serde(rename = "riseRate")]
    pub rise_rate: Option<Decimal>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TickerData {
    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.buy? + self.sell?) / Decimal::TWO)
    }

    /// Get the bid/ask spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.sell? - self.buy?)
    }
}

/// Single-pair ticker response
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    /// Ticker fields
    pub ticker: TickerData,
    /// Server timestamp; string or number depending on the exchange
    pub date: Option<Value>,
}

impl TickerResponse {
    /// Get the server timestamp in milliseconds
    pub fn date_ms(&self) -> Option<u64> {
        match self.date.as_ref()? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }
}

/// All-pairs ticker response, keyed by pair name
pub type TickersResponse = HashMap<String, TickerData>;

/// Orderbook snapshot for one pair
#[derive(Debug, Clone, Deserialize)]
pub struct DepthData {
    /// Ask levels [price, amount]
    pub asks: Vec<Vec<Decimal>>,
    /// Bid levels [price, amount]
    pub bids: Vec<Vec<Decimal>>,
    /// Server timestamp
    pub timestamp: Option<u64>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl DepthData {
    /// Get the best (lowest) ask price
    ///
    /// Scans all levels rather than assuming a sort order on the wire.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().filter_map(|level| level.first().copied()).min()
    }

    /// Get the best (highest) bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().filter_map(|level| level.first().copied()).max()
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// One executed trade from the public trade feed
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRecord {
    /// Traded amount
    pub amount: Option<Decimal>,
    /// Trade price
    pub price: Option<Decimal>,
    /// Trade ID
    pub tid: Option<u64>,
    /// Trade time in milliseconds
    pub date: Option<u64>,
    /// Taker side ("buy" or "sell")
    #[serde(rename = "type")]
    pub side: Option<String>,
    /// Maker side ("bid" or "ask")
    pub trade_type: Option<String>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ============================================================================
// Account Types
// ============================================================================

/// Account balance response from `/api/getBalance`
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    /// Business status code; the success convention is exchange-defined
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Margin credit details, exchange-defined
    pub credits: Option<Value>,
    /// Per-currency funds
    #[serde(default)]
    pub funds: HashMap<String, FundInfo>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl BalanceResponse {
    /// Get the funds entry for a specific currency
    pub fn fund(&self, currency: &str) -> Option<&FundInfo> {
        self.funds.get(currency)
    }

    /// Get all currencies with a non-zero total balance
    pub fn non_zero(&self) -> HashMap<String, Decimal> {
        self.funds
            .iter()
            .filter_map(|(currency, fund)| {
                let total = fund.total?;
                if total.is_zero() {
                    None
                } else {
                    Some((currency.clone(), total))
                }
            })
            .collect()
    }
}

/// Balance breakdown for one currency
#[derive(Debug, Clone, Deserialize)]
pub struct FundInfo {
    /// Total balance including frozen amounts
    pub total: Option<Decimal>,
    /// Amount locked in open orders and pending withdrawals
    pub freeze: Option<Decimal>,
    /// Amount available for trading
    pub balance: Option<Decimal>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Request to place a limit order
///
/// EXX's order endpoint takes a pair, side, amount and price; there is no
/// separate market-order form.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading pair (e.g. "ensa_eth")
    pub currency: String,
    /// Order side
    pub side: OrderSide,
    /// Order amount in base currency
    pub amount: Decimal,
    /// Limit price
    pub price: Decimal,
}

impl OrderRequest {
    /// Create an order request
    pub fn new(
        currency: impl Into<String>,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            currency: currency.into(),
            side,
            amount,
            price,
        }
    }

    /// Create a buy order
    pub fn buy(currency: impl Into<String>, amount: Decimal, price: Decimal) -> Self {
        Self::new(currency, OrderSide::Buy, amount, price)
    }

    /// Create a sell order
    pub fn sell(currency: impl Into<String>, amount: Decimal, price: Decimal) -> Self {
        Self::new(currency, OrderSide::Sell, amount, price)
    }
}

/// Response from placing an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    /// Business status code
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Assigned order ID; string or number depending on the exchange
    pub id: Option<Value>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl OrderResponse {
    /// Get the assigned order ID as a string
    pub fn order_id(&self) -> Option<String> {
        value_to_string(self.id.as_ref()?)
    }
}

/// Response from cancelling an order
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResponse {
    /// Business status code
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Order details from `/api/getorder`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInfo {
    /// Trading pair
    pub currency: Option<String>,
    /// Order ID; string or number depending on the exchange
    pub id: Option<Value>,
    /// Limit price
    pub price: Option<Decimal>,
    /// Fees charged so far
    pub fees: Option<Decimal>,
    /// Total ordered amount
    pub total_amount: Option<Decimal>,
    /// Amount filled so far
    pub trade_amount: Option<Decimal>,
    /// Quote value filled so far
    pub trade_money: Option<Decimal>,
    /// Time of the last fill in milliseconds
    pub trade_date: Option<u64>,
    /// Order status code, exchange-defined
    pub status: Option<i64>,
    /// Order side ("buy" or "sell")
    #[serde(rename = "type")]
    pub side: Option<String>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl OrderInfo {
    /// Get the order ID as a string
    pub fn order_id(&self) -> Option<String> {
        value_to_string(self.id.as_ref()?)
    }

    /// Get the amount still unfilled
    pub fn remaining_amount(&self) -> Option<Decimal> {
        Some(self.total_amount? - self.trade_amount?)
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Response from requesting a withdrawal
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResponse {
    /// Business status code
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Withdrawal record ID; string or number depending on the exchange
    pub id: Option<Value>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl WithdrawResponse {
    /// Get the withdrawal record ID as a string
    pub fn record_id(&self) -> Option<String> {
        value_to_string(self.id.as_ref()?)
    }
}

/// Withdrawal history page from `/api/getWithdrawRecord`
///
/// The page payload is exchange-defined and left in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawRecordResponse {
    /// Business status code
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Registered withdrawal address from `/api/getWithdrawAddress`
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawAddressResponse {
    /// Business status code
    pub code: Option<i64>,
    /// Human-readable status message
    #[serde(alias = "msg")]
    pub message: Option<String>,
    /// Exchange-defined remainder
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_decodes_string_prices() {
        let body = r#"{"ticker":{"buy":"0.0001","sell":"0.00012","last":"0.00011","vol":"1000"},"date":"1507875747359"}"#;
        let ticker: TickerResponse = serde_json::from_str(body).unwrap();

        assert_eq!(ticker.ticker.buy, Some(dec!(0.0001)));
        assert_eq!(ticker.ticker.sell, Some(dec!(0.00012)));
        assert_eq!(ticker.ticker.high, None);
        assert_eq!(ticker.date_ms(), Some(1507875747359));
        assert_eq!(ticker.ticker.spread(), Some(dec!(0.00002)));
    }

    #[test]
    fn test_ticker_date_as_number() {
        let body = r#"{"ticker":{"buy":"1.0"},"date":1507875747359}"#;
        let ticker: TickerResponse = serde_json::from_str(body).unwrap();
        assert_eq!(ticker.date_ms(), Some(1507875747359));
    }

    #[test]
    fn test_depth_best_levels_ignore_wire_order() {
        let body = r#"{"asks":[["0.00013","5"],["0.00012","10"]],"bids":[["0.00009","3"],["0.0001","7"]],"timestamp":1507875747}"#;
        let depth: DepthData = serde_json::from_str(body).unwrap();

        assert_eq!(depth.best_ask(), Some(dec!(0.00012)));
        assert_eq!(depth.best_bid(), Some(dec!(0.0001)));
        assert_eq!(depth.spread(), Some(dec!(0.00002)));
    }

    #[test]
    fn test_depth_accepts_numeric_levels() {
        let body = r#"{"asks":[[0.00012,10]],"bids":[[0.0001,7]]}"#;
        let depth: DepthData = serde_json::from_str(body).unwrap();
        assert_eq!(depth.best_ask(), Some(dec!(0.00012)));
        assert!(depth.timestamp.is_none());
    }

    #[test]
    fn test_trade_record_decodes_mixed_fields() {
        let body = r#"[{"amount":10.5,"price":"0.0001","tid":12345,"date":1507875747000,"type":"buy","trade_type":"bid"}]"#;
        let trades: Vec<TradeRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].amount, Some(dec!(10.5)));
        assert_eq!(trades[0].price, Some(dec!(0.0001)));
        assert_eq!(trades[0].side.as_deref(), Some("buy"));
    }

    #[test]
    fn test_balance_funds_and_non_zero() {
        let body = r#"{"funds":{"ENSA":{"total":"100","freeze":"10","balance":"90"},"ETH":{"total":"0","freeze":"0","balance":"0"}},"credits":[]}"#;
        let balance: BalanceResponse = serde_json::from_str(body).unwrap();

        assert_eq!(balance.fund("ENSA").and_then(|f| f.balance), Some(dec!(90)));
        let non_zero = balance.non_zero();
        assert_eq!(non_zero.len(), 1);
        assert_eq!(non_zero.get("ENSA"), Some(&dec!(100)));
    }

    #[test]
    fn test_order_response_id_string_or_number() {
        let with_string: OrderResponse =
            serde_json::from_str(r#"{"code":100,"message":"ok","id":"13877"}"#).unwrap();
        assert_eq!(with_string.order_id().as_deref(), Some("13877"));

        let with_number: OrderResponse =
            serde_json::from_str(r#"{"code":100,"message":"ok","id":13877}"#).unwrap();
        assert_eq!(with_number.order_id().as_deref(), Some("13877"));
    }

    #[test]
    fn test_order_request_constructors() {
        let order = OrderRequest::buy("ensa_eth", dec!(1.0), dec!(10));

        assert_eq!(order.currency, "ensa_eth");
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.amount, dec!(1.0));
        assert_eq!(order.price, dec!(10));
        assert_eq!(order.side.to_string(), "buy");
    }

    #[test]
    fn test_order_info_remaining_amount() {
        let body = r#"{"currency":"ensa_eth","id":13877,"price":"10","total_amount":"5","trade_amount":"2","status":1,"type":"sell"}"#;
        let info: OrderInfo = serde_json::from_str(body).unwrap();

        assert_eq!(info.remaining_amount(), Some(dec!(3)));
        assert_eq!(info.order_id().as_deref(), Some("13877"));
    }

    #[test]
    fn test_unknown_fields_land_in_extra() {
        let body = r#"{"code":100,"msg":"ok","somethingNew":42}"#;
        let ack: WithdrawRecordResponse = serde_json::from_str(body).unwrap();

        assert_eq!(ack.code, Some(100));
        assert_eq!(ack.message.as_deref(), Some("ok"));
        assert_eq!(ack.extra.get("somethingNew"), Some(&Value::from(42)));
    }
}

/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Order direction, encoded by the exchange as `0` (buy) or `1` (sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn code(self) -> i64 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "buy" => Some(OrderSide::Buy),
                "sell" => Some(OrderSide::Sell),
                other => other.parse::<i64>().ok().and_then(Self::from_code),
            },
            Value::Number(number) => number.as_i64().and_then(Self::from_code),
            _ => None,
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(OrderSide::Buy),
            1 => Some(OrderSide::Sell),
            _ => None,
        }
    }
}

impl Serialize for OrderSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderSide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid order side: {value}")))
    }
}

/// Order state as reported by `open_orders` and `lookup_order`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Cancelled,
    Active,
    PartiallyFilled,
    Complete,
}

impl OrderStatus {
    pub fn code(self) -> i64 {
        match self {
            OrderStatus::Cancelled => -1,
            OrderStatus::Active => 0,
            OrderStatus::PartiallyFilled => 1,
            OrderStatus::Complete => 2,
        }
    }

    /// Still resting on the book
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Active | OrderStatus::PartiallyFilled)
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(OrderStatus::Cancelled),
            0 => Some(OrderStatus::Active),
            1 => Some(OrderStatus::PartiallyFilled),
            2 => Some(OrderStatus::Complete),
            _ => None,
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let code = match &value {
            Value::String(raw) => raw.trim().parse::<i64>().ok(),
            Value::Number(number) => number.as_i64(),
            _ => None,
        };
        code.and_then(Self::from_code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid order status: {value}")))
    }
}

/// Taker side of a public trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSide {
    Buy,
    Sell,
}

/// Lookback window for the `transactions` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionWindow {
    Minute,
    #[default]
    Hour,
}

impl TransactionWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionWindow::Minute => "minute",
            TransactionWindow::Hour => "hour",
        }
    }
}

/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{OrderSide, OrderStatus, TransactionSide};

/// Trading summary returned by `ticker`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub high: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub low: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub last: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_decimal")]
    pub bid: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_decimal")]
    pub ask: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_decimal")]
    pub volume: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_decimal")]
    pub vwap: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_string")]
    pub timestamp: Option<String>,
}

/// One `[price, amount]` entry of the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel(
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")] pub Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")] pub Decimal,
);

impl BookLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn amount(&self) -> Decimal {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_optional_string")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    #[serde(default)]
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }
}

/// Public trade from `transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "serde_helpers::deserialize_string")]
    pub date: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_i64")]
    pub tid: i64,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub price: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub amount: Decimal,
    pub side: TransactionSide,
}

/// Holdings for a single currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub balance: Decimal,
    pub reserved: Decimal,
    pub available: Decimal,
}

/// Account balance from `balance`
///
/// The exchange reports flat `<currency>_balance`, `<currency>_reserved` and
/// `<currency>_available` keys; they are grouped per lowercase currency code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>")]
pub struct AccountBalance {
    pub fee: Option<Decimal>,
    pub currencies: BTreeMap<String, CurrencyBalance>,
}

impl AccountBalance {
    pub fn currency(&self, code: &str) -> Option<&CurrencyBalance> {
        self.currencies.get(&code.to_ascii_lowercase())
    }

    /// Available amount, zero for currencies the account never held
    pub fn available(&self, code: &str) -> Decimal {
        self.currency(code)
            .map_or(Decimal::ZERO, |balance| balance.available)
    }
}

impl TryFrom<BTreeMap<String, Value>> for AccountBalance {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Value>) -> Result<Self, Self::Error> {
        let mut balance = AccountBalance::default();

        for (key, value) in raw {
            if key == "fee" {
                balance.fee = serde_helpers::optional_decimal_from_value(&value)
                    .map_err(|e| format!("fee: {e}"))?;
                continue;
            }

            let Some((currency, kind)) = key.rsplit_once('_') else {
                continue;
            };
            if !matches!(kind, "balance" | "reserved" | "available") {
                continue;
            }

            let amount = serde_helpers::optional_decimal_from_value(&value)
                .map_err(|e| format!("{key}: {e}"))?
                .unwrap_or(Decimal::ZERO);
            let entry = balance
                .currencies
                .entry(currency.to_ascii_lowercase())
                .or_default();
            match kind {
                "balance" => entry.balance = amount,
                "reserved" => entry.reserved = amount,
                _ => entry.available = amount,
            }
        }

        Ok(balance)
    }
}

/// Resting order from `open_orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    #[serde(deserialize_with = "serde_helpers::deserialize_string")]
    pub id: String,
    pub datetime: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub price: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub amount: Decimal,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
}

/// Order details from `lookup_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLookup {
    #[serde(deserialize_with = "serde_helpers::deserialize_string")]
    pub id: String,
    pub book: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub price: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub status: OrderStatus,
    pub created: String,
    pub updated: String,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn optional_decimal_from_value(value: &Value) -> Result<Option<Decimal>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(raw) if raw.trim().is_empty() => Ok(None),
            Value::String(raw) => Decimal::from_str(raw.trim())
                .map(Some)
                .map_err(|e| e.to_string()),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .map(Some)
                .map_err(|e| e.to_string()),
            other => Err(format!("invalid decimal value: {other}")),
        }
    }

    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        optional_decimal_from_value(&value)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("missing decimal value"))
    }

    pub fn deserialize_optional_decimal<'de, D>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        optional_decimal_from_value(&value).map_err(serde::de::Error::custom)
    }

    pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| serde::de::Error::custom(format!("invalid integer: {number}"))),
            Value::String(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid integer {raw:?}: {e}"))),
            other => Err(serde::de::Error::custom(format!(
                "expected integer or numeric string, got {other}"
            ))),
        }
    }

    pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_optional_string(deserializer)?
            .ok_or_else(|| serde::de::Error::custom("missing string value"))
    }

    pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(raw) => Ok(Some(raw)),
            Value::Number(number) => Ok(Some(number.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }
}

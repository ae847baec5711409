//! Receipt document model.
//!
//! All types derive `Serialize + Deserialize` so the same types work for
//! both Rust API construction and JSON input. Field names are camelCase on
//! the wire; the shorter `price` / `total` / `date` keys are accepted too.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrukError};
use crate::money::Money;

fn default_currency() -> String {
    "IDR".into()
}

/// One purchased product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    #[serde(alias = "price")]
    pub unit_price: Money,
    #[serde(alias = "total")]
    pub line_total: Money,
}

/// Everything printed on one ticket.
///
/// Totals are taken as given: nothing here or in the formatter checks that
/// `subtotal - discount + tax == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDocument {
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_address: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Money>,
    pub total: Money,
    pub payment_method: String,
    pub transaction_id: String,
    /// Local wall-clock time of the sale
    #[serde(alias = "date", deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    /// ISO 4217 code handed to the currency formatter
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl ReceiptDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StrukError::Document(e.to_string()))
    }
}

impl LineItem {
    /// Amounts are in whole major units; build the fields directly for
    /// fractional prices.
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: i64, line_total: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: Money::from_major(unit_price),
            line_total: Money::from_major(line_total),
        }
    }
}

/// Accepts a naive `2026-10-19T14:30:05` or an RFC 3339 timestamp with an
/// offset.
///
/// An offset timestamp keeps the wall-clock time written in it
/// (`07:00+07:00` prints as `07:00`); it is not converted to the time zone
/// of the printing host, so the same document prints the same ticket on
/// every machine.
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_local()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const JSON: &str = r#"{
        "storeName": "Toko Budi",
        "items": [{"name": "Kopi", "quantity": 2, "unitPrice": 15000, "lineTotal": 30000}],
        "subtotal": 30000,
        "total": 30000,
        "paymentMethod": "Cash",
        "transactionId": "TRX-001",
        "timestamp": "2026-10-19T14:30:05"
    }"#;

    #[test]
    fn test_from_json_defaults() {
        let doc = ReceiptDocument::from_json(JSON).unwrap();
        assert_eq!(doc.store_name, "Toko Budi");
        assert_eq!(doc.store_address, None);
        assert_eq!(doc.tax, None);
        assert_eq!(doc.discount, None);
        assert_eq!(doc.currency, "IDR");
        assert_eq!(doc.items, vec![LineItem::new("Kopi", 2, 15000, 30000)]);
        assert_eq!(
            doc.timestamp,
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(14, 30, 5)
                .unwrap()
        );
    }

    #[test]
    fn test_short_aliases() {
        let json = r#"{
            "storeName": "X",
            "items": [{"name": "Teh", "quantity": 1, "price": 5000, "total": 5000}],
            "subtotal": 5000, "total": 5000,
            "paymentMethod": "QRIS", "transactionId": "1",
            "date": "2026-10-19T07:00:00+07:00"
        }"#;
        let doc = ReceiptDocument::from_json(json).unwrap();
        assert_eq!(doc.items[0].unit_price, Money::from_major(5000));
        assert_eq!(doc.timestamp.format("%H:%M").to_string(), "07:00");
    }

    #[test]
    fn test_decimal_amounts() {
        let json = JSON
            .replace("\"subtotal\": 30000", "\"subtotal\": 30000, \"tax\": 1357.95")
            .replace("\"unitPrice\": 15000", "\"unitPrice\": 15000.5");
        let doc = ReceiptDocument::from_json(&json).unwrap();
        assert_eq!(doc.tax, Some(Money::from_minor(135_795)));
        assert_eq!(doc.items[0].unit_price, Money::from_minor(1_500_050));
        assert_eq!(doc.subtotal, Money::from_major(30000));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let json = JSON.replace("\"quantity\": 2", "\"quantity\": -1");
        assert!(matches!(
            ReceiptDocument::from_json(&json),
            Err(StrukError::Document(_))
        ));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let json = JSON.replace("2026-10-19T14:30:05", "yesterday");
        assert!(matches!(
            ReceiptDocument::from_json(&json),
            Err(StrukError::Document(_))
        ));
    }
}

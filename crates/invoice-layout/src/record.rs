//! Invoice request and record types
//!
//! [`InvoiceRequest`] is the raw JSON body as clients send it; optional
//! fields may be missing and item amounts may be any JSON value.
//! [`InvoiceRecord`] is the fully populated result of normalization and is
//! the only thing the layout engine reads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw invoice request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceRequest {
    #[serde(alias = "invoiceNo")]
    pub invoice_no: String,

    #[serde(default, alias = "invoiceDate")]
    pub invoice_date: Option<String>,

    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,

    #[serde(alias = "clientName")]
    pub client_name: String,

    #[serde(default, alias = "clientPhone")]
    pub client_phone: Option<String>,

    #[serde(default, alias = "clientEmail")]
    pub client_email: Option<String>,

    /// Address with lines separated by `\n`
    #[serde(default, alias = "clientAddress")]
    pub client_address: Option<String>,

    #[serde(default)]
    pub items: Vec<ItemRequest>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub discount: Option<f64>,

    #[serde(
        default,
        alias = "advancePayment",
        deserialize_with = "lenient_number"
    )]
    pub advance_payment: Option<f64>,

    /// GST percentage
    #[serde(default, alias = "gstRate", deserialize_with = "lenient_number")]
    pub gst_rate: Option<f64>,
}

/// Raw line item; price and quantity are coerced during normalization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemRequest {
    #[serde(default, alias = "description")]
    pub desc: String,

    #[serde(default)]
    pub price: Option<Value>,

    #[serde(default, alias = "quantity")]
    pub qty: Option<Value>,
}

/// Accept a JSON number, a numeric string, or null
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => crate::normalize::coerce_number(Some(&value))
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {value}"))),
    }
}

/// Normalized invoice record, immutable during a render
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    pub invoice_no: String,
    pub invoice_date: String,
    pub due_date: String,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    /// Non-empty address lines in print order
    pub client_address: Vec<String>,
    pub items: Vec<LineItem>,
    pub discount: f64,
    pub advance_payment: f64,
    pub gst_rate: f64,
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub desc: String,
    pub amounts: LineAmounts,
}

/// Coerced price and quantity of a line item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAmounts {
    Valid { price: f64, qty: f64 },
    /// Price or quantity could not be read as a number
    Invalid,
}

impl LineItem {
    pub fn new(desc: impl Into<String>, price: f64, qty: f64) -> Self {
        Self {
            desc: desc.into(),
            amounts: LineAmounts::Valid { price, qty },
        }
    }

    pub fn invalid(desc: impl Into<String>) -> Self {
        Self {
            desc: desc.into(),
            amounts: LineAmounts::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.amounts, LineAmounts::Valid { .. })
    }

    /// `price * qty`; invalid rows contribute nothing
    pub fn subtotal(&self) -> f64 {
        match self.amounts {
            LineAmounts::Valid { price, qty } => price * qty,
            LineAmounts::Invalid => 0.0,
        }
    }
}

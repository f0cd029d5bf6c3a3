//! Request normalization
//!
//! Every default is applied here, once, so the layout never has to ask
//! whether a field was present.

use crate::record::{InvoiceRecord, InvoiceRequest, ItemRequest, LineItem};
use chrono::{Local, NaiveDate};
use serde_json::Value;

/// GST percentage used when the request carries none
pub const DEFAULT_GST_RATE: f64 = 5.0;

/// Placeholder for an absent due date
const NO_DUE_DATE: &str = "N/A";

/// `dd.mm.yy`
const INVOICE_DATE_FORMAT: &str = "%d.%m.%y";

impl InvoiceRequest {
    /// Normalize against today's local date
    pub fn normalize(self) -> InvoiceRecord {
        normalize(self, Local::now().date_naive())
    }
}

/// Build a fully populated record; `today` fills a missing invoice date
pub fn normalize(request: InvoiceRequest, today: NaiveDate) -> InvoiceRecord {
    let invoice_date = non_blank(request.invoice_date)
        .unwrap_or_else(|| today.format(INVOICE_DATE_FORMAT).to_string());
    let due_date = non_blank(request.due_date).unwrap_or_else(|| NO_DUE_DATE.to_string());

    let client_address = request
        .client_address
        .as_deref()
        .map(|address| {
            address
                .split('\n')
                .map(|line| line.trim_end_matches('\r').trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    InvoiceRecord {
        invoice_no: request.invoice_no,
        invoice_date,
        due_date,
        client_name: request.client_name,
        client_phone: non_blank(request.client_phone),
        client_email: non_blank(request.client_email),
        client_address,
        items: request.items.into_iter().map(normalize_item).collect(),
        discount: request.discount.unwrap_or(0.0),
        advance_payment: request.advance_payment.unwrap_or(0.0),
        gst_rate: request.gst_rate.unwrap_or(DEFAULT_GST_RATE),
    }
}

fn normalize_item(item: ItemRequest) -> LineItem {
    match (coerce_number(item.price.as_ref()), coerce_number(item.qty.as_ref())) {
        (Some(price), Some(qty)) => LineItem::new(item.desc, price, qty),
        _ => {
            tracing::debug!(desc = %item.desc, "line item has a non-numeric price or quantity");
            LineItem::invalid(item.desc)
        }
    }
}

/// Coerce a JSON value into a finite number
///
/// Absent and null values are 0. Numbers and numeric strings are accepted;
/// anything else is `None`.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    number.filter(|n| n.is_finite())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

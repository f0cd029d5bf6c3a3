//! Financial totals

use crate::record::{InvoiceRecord, LineItem};

/// Derived amounts of one invoice, at full precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub sub_total: f64,
    pub discount: f64,
    /// `sub_total - discount`
    pub taxable: f64,
    pub gst_rate: f64,
    pub gst_amount: f64,
    pub grand_total: f64,
    pub advance_payment: f64,
    /// `grand_total - advance_payment`; negative on overpayment
    pub amount_due: f64,
}

/// Compute the invoice totals
///
/// Invalid line items contribute 0 to the sub-total. No rounding happens
/// here; amounts are rounded only when formatted for display.
pub fn compute_totals(
    items: &[LineItem],
    discount: f64,
    advance_payment: f64,
    gst_rate: f64,
) -> Totals {
    let sub_total: f64 = items.iter().map(LineItem::subtotal).sum();
    let taxable = sub_total - discount;
    let gst_amount = taxable * gst_rate / 100.0;
    let grand_total = taxable + gst_amount;

    Totals {
        sub_total,
        discount,
        taxable,
        gst_rate,
        gst_amount,
        grand_total,
        advance_payment,
        amount_due: grand_total - advance_payment,
    }
}

impl InvoiceRecord {
    pub fn totals(&self) -> Totals {
        compute_totals(
            &self.items,
            self.discount,
            self.advance_payment,
            self.gst_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trek_scenario() {
        let items = vec![LineItem::new("Trek", 1000.0, 2.0)];
        let totals = compute_totals(&items, 0.0, 500.0, 5.0);

        assert_eq!(totals.sub_total, 2000.0);
        assert_eq!(totals.gst_amount, 100.0);
        assert_eq!(totals.grand_total, 2100.0);
        assert_eq!(totals.amount_due, 1600.0);
    }

    #[test]
    fn test_discount_is_applied_before_gst() {
        let items = vec![
            LineItem::new("Hotel", 1500.0, 2.0),
            LineItem::new("Cab", 250.0, 4.0),
        ];
        let totals = compute_totals(&items, 1000.0, 0.0, 10.0);

        assert_eq!(totals.sub_total, 4000.0);
        assert_eq!(totals.taxable, 3000.0);
        assert_eq!(totals.gst_amount, 300.0);
        assert_eq!(totals.grand_total, 3300.0);
    }

    #[test]
    fn test_invalid_items_count_as_zero() {
        let items = vec![LineItem::new("Trek", 100.0, 1.0), LineItem::invalid("Broken")];
        assert_eq!(compute_totals(&items, 0.0, 0.0, 0.0).sub_total, 100.0);
    }

    #[test]
    fn test_overpayment_goes_negative() {
        let items = vec![LineItem::new("Trek", 100.0, 1.0)];
        let totals = compute_totals(&items, 0.0, 500.0, 0.0);
        assert_eq!(totals.amount_due, -400.0);
    }

    #[test]
    fn test_empty_invoice() {
        let totals = compute_totals(&[], 0.0, 0.0, 5.0);
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(totals.amount_due, 0.0);
    }
}

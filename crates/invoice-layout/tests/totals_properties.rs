//! Property-based tests for invoice totals.
//!
//! These tests use proptest to generate random non-negative invoices and
//! check the printed amounts against the closed-form totals.

use invoice_layout::format::format_amount;
use invoice_layout::{compute_totals, LineItem};
use proptest::prelude::*;

/// Rounding to cents moves a value by at most half a cent
const HALF_CENT: f64 = 0.005;

fn money() -> impl Strategy<Value = f64> {
    (0u64..10_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

fn quantity() -> impl Strategy<Value = f64> {
    (0u32..400u32).prop_map(|quarters| quarters as f64 / 4.0)
}

fn items() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((money(), quantity()), 0..12)
}

fn gst_rate() -> impl Strategy<Value = f64> {
    (0u32..=2800u32).prop_map(|hundredths| hundredths as f64 / 100.0)
}

fn line_items(rows: &[(f64, f64)]) -> Vec<LineItem> {
    rows.iter()
        .map(|(price, qty)| LineItem::new("Item", *price, *qty))
        .collect()
}

/// Read a printed amount back, e.g. `-1,250.00` -> -1250.0
fn parse_amount(text: &str) -> f64 {
    text.replace(',', "").parse().unwrap()
}

/// Float error grows with magnitude; allow it on top of the rounding step
fn tolerance(expected: f64) -> f64 {
    HALF_CENT + expected.abs() * 1e-12
}

/// Property: the printed amount due matches (Σ price·qty − discount)·(1 + rate/100) − advance
proptest! {
    #[test]
    fn prop_amount_due_matches_closed_form(
        rows in items(),
        discount in money(),
        advance in money(),
        rate in gst_rate(),
    ) {
        let totals = compute_totals(&line_items(&rows), discount, advance, rate);

        let sub_total: f64 = rows.iter().map(|(p, q)| p * q).sum();
        let expected = (sub_total - discount) * (1.0 + rate / 100.0) - advance;

        let printed = parse_amount(&format_amount(totals.amount_due));
        prop_assert!(
            (printed - expected).abs() <= tolerance(expected),
            "printed {} for expected {}", printed, expected
        );
    }
}

/// Property: each summary line is the rounded value of its own formula
proptest! {
    #[test]
    fn prop_summary_lines_match_formulas(
        rows in items(),
        discount in money(),
        advance in money(),
        rate in gst_rate(),
    ) {
        let totals = compute_totals(&line_items(&rows), discount, advance, rate);

        let sub_total: f64 = rows.iter().map(|(p, q)| p * q).sum();
        let gst = (sub_total - discount) * rate / 100.0;
        let grand = sub_total - discount + gst;

        for (value, expected) in [
            (totals.sub_total, sub_total),
            (totals.gst_amount, gst),
            (totals.grand_total, grand),
        ] {
            let printed = parse_amount(&format_amount(value));
            prop_assert!((printed - expected).abs() <= tolerance(expected));
        }
    }
}

/// Property: invalid rows never change the totals
proptest! {
    #[test]
    fn prop_invalid_rows_contribute_nothing(
        rows in items(),
        invalid_at in 0usize..12,
        discount in money(),
        rate in gst_rate(),
    ) {
        let valid = line_items(&rows);
        let mut mixed = valid.clone();
        mixed.insert(invalid_at.min(mixed.len()), LineItem::invalid("Broken"));

        prop_assert_eq!(
            compute_totals(&valid, discount, 0.0, rate),
            compute_totals(&mixed, discount, 0.0, rate)
        );
    }
}

/// Property: printed amounts always carry two decimals and grouped thousands
proptest! {
    #[test]
    fn prop_amount_format_shape(value in -1e9f64..1e9f64) {
        let text = format_amount(value);
        let unsigned = text.strip_prefix('-').unwrap_or(&text);
        let (whole, cents) = unsigned.split_once('.').unwrap();

        prop_assert_eq!(cents.len(), 2);
        let groups: Vec<&str> = whole.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        prop_assert!(groups[1..].iter().all(|g| g.len() == 3));
    }
}

//! Display formatting for amounts and plain numbers

/// Format a currency amount with thousands separators and two decimals
///
/// Negative amounts get a leading minus sign (`-1,250.00`); values that
/// round to zero never do.
pub fn format_amount(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.2}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Insert `,` between groups of three digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a number the way a float prints by default: at least one decimal
///
/// `2` prints as `2.0`, `1.5` as `1.5`. Used for quantities and the GST rate.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{n:.1}")
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(2000.0), "2,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1250.0), "-1,250.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_amount_special() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2.0");
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(12.25), "12.25");
        assert_eq!(format_number(-3.0), "-3.0");
    }
}

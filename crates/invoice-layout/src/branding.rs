//! Static company text printed on every invoice

use serde::{Deserialize, Serialize};

/// Terms lines starting with this mark get a green check glyph
pub const CHECK_MARK: char = '\u{2714}';

/// Company details, payment and bank information, terms
///
/// Static for the lifetime of a process; the defaults are the ones the
/// invoice has always carried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Branding {
    pub company_name: String,
    pub tagline: String,
    /// Printed as `UPI ID - <upi_id>`
    pub upi_id: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub bank_account: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub account_holder: String,
    /// One paragraph per entry; a leading `✔` becomes a green check mark
    pub terms: Vec<String>,
    /// Lines under the signature, separated by `\n`
    pub signature_caption: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company_name: "Yara Escape Tours & Trek".to_string(),
            tagline: "Specialist in: Sikkim, Darjelling, Northeast".to_string(),
            upi_id: "TOURISM.NORTHSIKKIM@CNRB".to_string(),
            phone: "+91 8250133947 / +91 9883023091".to_string(),
            website: "www.yaraservice.com".to_string(),
            address: "Gangtok, Lumsey Sikkim - 737101".to_string(),
            bank_account: "120033745630".to_string(),
            ifsc_code: "CNRB0003731".to_string(),
            bank_name: "Canara Bank".to_string(),
            account_holder: "Yara services".to_string(),
            terms: vec![
                "Please Pay 40% Advance payment within 12 Hours of receiving this invoice For Instant Booking Confirmation.".to_string(),
                format!("{CHECK_MARK} 100% REFUND ON CANCELLATION"),
                "(15 Days)".to_string(),
            ],
            signature_caption: "NORTH SIKKIM TOURS &\nTRAVELS PVT .LTD".to_string(),
        }
    }
}

impl Branding {
    pub fn upi_line(&self) -> String {
        format!("UPI ID - {}", self.upi_id)
    }

    /// (label, value) rows of the contact block
    pub fn contact_rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Phone:", self.phone.as_str()),
            ("Website:", self.website.as_str()),
            ("Address:", self.address.as_str()),
        ]
    }

    /// (label, value) rows of the bank block
    pub fn bank_rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Acc no:", self.bank_account.as_str()),
            ("IFSC code:", self.ifsc_code.as_str()),
            ("Bank:", self.bank_name.as_str()),
            ("Account Holder:", self.account_holder.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let branding: Branding =
            serde_json::from_str(r#"{ "company_name": "Other Tours" }"#).unwrap();
        assert_eq!(branding.company_name, "Other Tours");
        assert_eq!(branding.bank_name, "Canara Bank");
        assert_eq!(branding.terms.len(), 3);
    }

    #[test]
    fn test_upi_line() {
        assert_eq!(
            Branding::default().upi_line(),
            "UPI ID - TOURISM.NORTHSIKKIM@CNRB"
        );
    }

    #[test]
    fn test_rows() {
        let branding = Branding::default();
        assert_eq!(branding.contact_rows()[1], ("Website:", "www.yaraservice.com"));
        assert_eq!(branding.bank_rows()[3], ("Account Holder:", "Yara services"));
    }
}

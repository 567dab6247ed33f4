//! Country defaults used by the front ends
//!
//! Rates are placeholders for seeding inputs, not live quotes.

use serde::Serialize;

/// Currency and default mortgage rate for a country
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Market {
    pub name: &'static str,
    /// ISO 4217 currency code
    pub currency: &'static str,
    /// Default annual rate in percent
    pub default_rate_percent: f64,
    pub flag: &'static str,
}

pub const DEFAULT_MARKET: &str = "United States";

pub static MARKETS: &[Market] = &[
    Market { name: "United States", currency: "USD", default_rate_percent: 7.0, flag: "🇺🇸" },
    Market { name: "Morocco", currency: "MAD", default_rate_percent: 6.5, flag: "🇲🇦" },
    Market { name: "Eurozone", currency: "EUR", default_rate_percent: 4.5, flag: "🇪🇺" },
    Market { name: "United Kingdom", currency: "GBP", default_rate_percent: 6.0, flag: "🇬🇧" },
    Market { name: "Canada", currency: "CAD", default_rate_percent: 6.5, flag: "🇨🇦" },
    Market { name: "Australia", currency: "AUD", default_rate_percent: 6.0, flag: "🇦🇺" },
    Market { name: "South Africa", currency: "ZAR", default_rate_percent: 8.0, flag: "🇿🇦" },
    Market { name: "India", currency: "INR", default_rate_percent: 7.5, flag: "🇮🇳" },
    Market { name: "Brazil", currency: "BRL", default_rate_percent: 9.0, flag: "🇧🇷" },
    Market { name: "Japan", currency: "JPY", default_rate_percent: 3.5, flag: "🇯🇵" },
    Market { name: "Switzerland", currency: "CHF", default_rate_percent: 2.5, flag: "🇨🇭" },
    Market { name: "Mexico", currency: "MXN", default_rate_percent: 11.0, flag: "🇲🇽" },
];

/// Look up a market by country name or currency code, ignoring case
pub fn find_market(key: &str) -> Option<&'static Market> {
    let key = key.trim();
    MARKETS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(key) || m.currency.eq_ignore_ascii_case(key))
}

pub fn default_market() -> &'static Market {
    &MARKETS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_or_code() {
        assert_eq!(find_market("morocco").unwrap().currency, "MAD");
        assert_eq!(find_market(" GBP ").unwrap().name, "United Kingdom");
        assert!(find_market("Atlantis").is_none());
    }

    #[test]
    fn test_default_market() {
        assert_eq!(default_market().name, DEFAULT_MARKET);
        assert_eq!(default_market().default_rate_percent, 7.0);
    }
}

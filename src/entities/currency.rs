// 💱 Currency - fixed exchange rates against the base currency
//
// Rates are static: PLN per one unit of the currency.
// PLN is the base currency and always has rate 1.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency an account is denominated in
///
/// Variants are declared in code order so the derived `Ord` sorts by ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Chf,
    Eur,
    Gbp,
    Pln,
    Usd,
}

impl Currency {
    /// The currency every monetary aggregate is normalized into
    pub const BASE: Currency = Currency::Pln;

    pub const ALL: [Currency; 5] = [
        Currency::Chf,
        Currency::Eur,
        Currency::Gbp,
        Currency::Pln,
        Currency::Usd,
    ];

    /// Units of base currency per one unit of this currency
    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Chf => Decimal::new(450, 2),
            Currency::Eur => Decimal::new(430, 2),
            Currency::Gbp => Decimal::new(500, 2),
            Currency::Pln => Decimal::ONE,
            Currency::Usd => Decimal::new(400, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Chf => "CHF",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Pln => "PLN",
            Currency::Usd => "USD",
        }
    }

    /// Parse an upper-case ISO code
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.as_str() == code)
    }

    pub fn is_base(&self) -> bool {
        *self == Currency::BASE
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_currency_rate_is_one() {
        assert!(Currency::BASE.is_base());
        assert_eq!(Currency::BASE.rate(), Decimal::ONE);
    }

    #[test]
    fn test_all_rates_positive() {
        for currency in Currency::ALL {
            assert!(currency.rate() > Decimal::ZERO, "{} rate", currency);
        }
    }

    #[test]
    fn test_ordering_follows_code() {
        let mut by_variant = Currency::ALL.to_vec();
        by_variant.sort();
        let codes: Vec<&str> = by_variant.iter().map(|c| c.as_str()).collect();

        let mut by_code = codes.clone();
        by_code.sort();
        assert_eq!(codes, by_code);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("GBP"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code("gbp"), None);
        assert_eq!(Currency::from_code("XYZ"), None);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Currency::Usd).unwrap();
        assert_eq!(json, "\"USD\"");

        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }
}

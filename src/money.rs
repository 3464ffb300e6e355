// 💰 Monetary Converter - normalize balances into the base currency
//
// amount × rate, rounded to 4 significant digits, half-up.
// Sums add the already-rounded per-account values, starting from exact zero.
//
// Decimal only. Never f64.

use crate::entities::{Account, Currency};
use crate::error::{ReportError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept when normalizing a single amount
pub const SIGNIFICANT_DIGITS: u32 = 4;

fn overflow(amount: Decimal, currency: Currency) -> ReportError {
    ReportError::InvalidState(format!(
        "{} {} overflows the base currency",
        amount, currency
    ))
}

/// Convert `amount` of `currency` into the base currency
pub fn to_base_currency(amount: Decimal, currency: Currency) -> Result<Decimal> {
    let converted = if currency.is_base() {
        amount
    } else {
        amount
            .checked_mul(currency.rate())
            .ok_or_else(|| overflow(amount, currency))?
    };

    converted
        .round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .ok_or_else(|| overflow(amount, currency))
}

/// Value of one account in the base currency
pub fn account_in_base_currency(account: &Account) -> Result<Decimal> {
    to_base_currency(account.amount, account.currency)
}

/// Total of the given accounts in the base currency. Empty input gives zero.
pub fn sum_in_base_currency<'a, I>(accounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = &'a Account>,
{
    accounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, account| {
            add(total, account_in_base_currency(account)?)
        })
}

/// `total + value`, refusing to overflow
pub(crate) fn add(total: Decimal, value: Decimal) -> Result<Decimal> {
    total.checked_add(value).ok_or_else(|| {
        ReportError::InvalidState("total overflows the base currency".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AccountType;

    fn account(amount: Decimal, currency: Currency) -> Account {
        Account::new("N", amount, currency, AccountType::Checking)
    }

    #[test]
    fn test_usd_conversion() {
        assert_eq!(Currency::Usd.rate(), Decimal::new(400, 2));
        assert_eq!(
            to_base_currency(Decimal::new(100, 0), Currency::Usd).unwrap(),
            Decimal::new(4000, 1)
        );
    }

    #[test]
    fn test_zero_stays_zero() {
        for currency in Currency::ALL {
            assert_eq!(to_base_currency(Decimal::ZERO, currency).unwrap(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_rounds_to_four_significant_digits() {
        // 1234.56 EUR * 4.30 = 5308.608 → 5309
        assert_eq!(
            to_base_currency(Decimal::new(123456, 2), Currency::Eur).unwrap(),
            Decimal::new(5309, 0)
        );
        // 0.123456 PLN → 0.1235
        assert_eq!(
            to_base_currency(Decimal::new(123456, 6), Currency::Pln).unwrap(),
            Decimal::new(1235, 4)
        );
    }

    #[test]
    fn test_rounds_half_up() {
        // 1.2345 → 1.235 and -1.2345 → -1.235 (ties away from zero)
        assert_eq!(
            to_base_currency(Decimal::new(12345, 4), Currency::Pln).unwrap(),
            Decimal::new(1235, 3)
        );
        assert_eq!(
            to_base_currency(Decimal::new(-12345, 4), Currency::Pln).unwrap(),
            Decimal::new(-1235, 3)
        );
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let accounts: Vec<Account> = vec![];
        assert_eq!(sum_in_base_currency(&accounts).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_sum_adds_rounded_values() {
        // 1.23456 PLN rounds to 1.235 on its own; two of them sum to 2.470
        let accounts = vec![
            account(Decimal::new(123456, 5), Currency::Pln),
            account(Decimal::new(123456, 5), Currency::Pln),
        ];
        assert_eq!(sum_in_base_currency(&accounts).unwrap(), Decimal::new(2470, 3));
    }

    #[test]
    fn test_sum_is_order_independent() {
        let mut accounts = vec![
            account(Decimal::new(100, 0), Currency::Usd),
            account(Decimal::new(-2550, 2), Currency::Eur),
            account(Decimal::new(7, 0), Currency::Gbp),
            account(Decimal::new(123456, 3), Currency::Chf),
        ];
        let forward = sum_in_base_currency(&accounts).unwrap();
        accounts.reverse();
        assert_eq!(sum_in_base_currency(&accounts).unwrap(), forward);
        accounts.swap(0, 2);
        assert_eq!(sum_in_base_currency(&accounts).unwrap(), forward);
    }

    #[test]
    fn test_base_currency_still_rounded() {
        // 123456.78 PLN → 123500
        assert_eq!(
            to_base_currency(Decimal::new(12345678, 2), Currency::Pln).unwrap(),
            Decimal::new(123500, 0)
        );
    }

    #[test]
    fn test_conversion_overflow_is_invalid_state() {
        let err = to_base_currency(Decimal::MAX, Currency::Gbp).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_sum_overflow_is_invalid_state() {
        let accounts = vec![
            account(Decimal::MAX, Currency::Pln),
            account(Decimal::MAX, Currency::Pln),
        ];
        let err = sum_in_base_currency(&accounts).unwrap_err();
        assert!(err.is_invalid_state());
    }
}

// 💳 Account Entity - a balance in one currency, owned by exactly one user
//
// "Account number is IDENTITY, amount/currency/type are its VALUE"
//
// - Amount is an arbitrary-precision decimal (may be negative or zero)
// - Never shared between users
// - Immutable once seeded

use super::currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

/// Kind of account. Declaration order only breaks ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Checking account (debit card, daily transactions)
    Checking,

    /// Savings account (interest-bearing)
    Savings,

    /// Term deposit
    Deposit,

    /// Credit line
    Credit,

    /// Investment account (brokerage, funds)
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Deposit,
        AccountType::Credit,
        AccountType::Investment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Deposit => "Deposit",
            AccountType::Credit => "Credit",
            AccountType::Investment => "Investment",
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Account number, unique across the dataset
    pub number: String,

    /// Balance in `currency`
    pub amount: Decimal,

    pub currency: Currency,

    pub account_type: AccountType,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        amount: Decimal,
        currency: Currency,
        account_type: AccountType,
    ) -> Self {
        Account {
            number: number.into(),
            amount,
            currency,
            account_type,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new(
            "PL001",
            Decimal::new(100050, 2),
            Currency::Usd,
            AccountType::Checking,
        );

        assert_eq!(account.number, "PL001");
        assert_eq!(account.amount, Decimal::new(100050, 2));
        assert_eq!(account.currency, Currency::Usd);
        assert_eq!(account.account_type, AccountType::Checking);
    }

    #[test]
    fn test_account_type_order_matches_declaration() {
        let mut sorted = AccountType::ALL;
        sorted.sort();
        assert_eq!(sorted, AccountType::ALL);
    }

    #[test]
    fn test_account_deserializes_from_json() {
        let json = r#"{
            "number": "PL42",
            "amount": "-12.50",
            "currency": "EUR",
            "account_type": "CREDIT"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.number, "PL42");
        assert_eq!(account.amount, Decimal::new(-1250, 2));
        assert_eq!(account.currency, Currency::Eur);
        assert_eq!(account.account_type, AccountType::Credit);
    }
}

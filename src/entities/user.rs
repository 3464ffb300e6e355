// 👤 User Entity - a person employed by a company, owning accounts
//
// Users are compared and hashed as whole records so they can key
// per-user aggregations.

use super::account::Account;
use serde::{Deserialize, Serialize};

/// Age from which a user counts as an adult
pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Woman,
    Man,
    /// Neither woman nor man. Kept by whole-population aggregates.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub sex: Sex,

    /// Accounts owned exclusively by this user
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        sex: Sex,
        accounts: Vec<Account>,
    ) -> Self {
        User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            sex,
            accounts,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }
}

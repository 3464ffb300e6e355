// Entity Models - the organizational hierarchy
//
// Holding → Company → User → Account
//
// Every entity exclusively owns its children. The hierarchy is seeded once
// and never mutated by the reporting engine.

pub mod currency;
pub mod account;
pub mod user;
pub mod company;
pub mod holding;

pub use currency::Currency;
pub use account::{Account, AccountType};
pub use user::{Sex, User, ADULT_AGE};
pub use company::Company;
pub use holding::Holding;

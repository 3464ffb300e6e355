// Holding Reports - Core Library
// Exposes the reporting engine and its collaborators for the CLI and tests

pub mod entities;   // Domain model: Holding → Company → User → Account
pub mod error;
pub mod hierarchy;  // Flat views over the nested hierarchy
pub mod money;      // Base-currency conversion
pub mod sampling;   // Draw without replacement
pub mod export;     // NUMBER|AMOUNT|CURRENCY files
pub mod reports;    // ReportEngine - every query
pub mod seed;       // Mock generator + JSON datasets

// Re-export commonly used types
pub use entities::{
    Account, AccountType, Company, Currency, Holding, Sex, User, ADULT_AGE,
};
pub use error::{ReportError, Result};
pub use export::{export_accounts, read_accounts, write_accounts, ExportedAccount};
pub use money::{account_in_base_currency, sum_in_base_currency, to_base_currency};
pub use reports::{describe_age, is_man, is_woman, ReportEngine, CAPPED_USERS_LIMIT, NO_SUCH_USER};
pub use seed::{load_dataset, save_dataset, MockGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

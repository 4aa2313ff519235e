//! Domain models.

mod account_name;
mod portfolio_entry;

pub use account_name::{AccountName, AccountNameError};
pub use portfolio_entry::PortfolioEntry;

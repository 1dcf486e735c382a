pub mod config;
pub mod error;
pub mod import;
pub mod ledger;
pub mod output;
pub mod registry;
pub mod statistics;

pub use error::{LedgerError, RegistryError};
pub use ledger::{GradeLedger, SharedLedger};

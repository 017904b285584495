pub mod config;
pub mod corpus;
pub mod report;

use collections::{Count, TableError};
use thiserror::Error;

pub use config::Config;
pub use corpus::Corpus;
pub use report::{StrategyReport, run, run_strategy};

#[derive(Debug, Error)]
pub enum Error {
    /// Derived IO error
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    /// The command line could not be parsed
    #[error("Invalid arguments: {0}")]
    Config(#[from] config::ConfigError),

    /// A lookup failed while the key was expected to be present
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// The table disagrees with the independent tally of the corpus
    #[error("Count mismatch for {key:?}, expected: {expected} got: {got}")]
    Verification {
        key: String,
        expected: Count,
        got: Count,
    },
}

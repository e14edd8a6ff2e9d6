//! Unified error type for the store reporting tool.
//!
//! Every fallible function in the crate returns [`Result`], so database, I/O and
//! configuration failures all funnel through the same enum and can be `?`-propagated
//! up to `main`.

use thiserror::Error;

/// All errors the reporting tool can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Seed file or environment configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Any failure reported by the store (connection, constraint, query).
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Reading the menu input or writing its output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A price multiplier was zero, negative, or not finite.
    #[error("Invalid price factor: {factor}")]
    InvalidPriceFactor {
        /// The rejected multiplier
        factor: f64,
    },

    /// A seed order refers to a product or customer that does not exist.
    #[error("Seed order references unknown {kind} '{key}'")]
    SeedReference {
        /// `"product"` or `"customer"`
        kind: &'static str,
        /// The natural key that could not be resolved (product name or email)
        key: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

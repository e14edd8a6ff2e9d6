//! Seed data loading from TOML.
//!
//! The reference rows inserted on first run are described by a TOML document with
//! `[[products]]`, `[[customers]]` and `[[orders]]` tables. The repository's `seed.toml`
//! is compiled in as the built-in seed; setting `SEED_CONFIG` to a path loads a
//! different file of the same shape instead.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const BUILTIN_SEED: &str = include_str!("../../seed.toml");

/// Configuration structure representing an entire seed file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Products to insert, keyed by name
    #[serde(default)]
    pub products: Vec<ProductSeed>,
    /// Customers to insert, keyed by email
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,
    /// Orders to insert, keyed by customer + product + date
    #[serde(default)]
    pub orders: Vec<OrderSeed>,
}

/// One seeded product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Category label
    pub category: String,
    /// Unit price
    pub price: f64,
}

/// One seeded customer
#[derive(Debug, Deserialize, Clone)]
pub struct CustomerSeed {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
}

/// One seeded order. Products and customers are referenced by their natural keys
/// so the file does not depend on generated ids.
#[derive(Debug, Deserialize, Clone)]
pub struct OrderSeed {
    /// Email of the ordering customer
    pub customer_email: String,
    /// Name of the ordered product
    pub product_name: String,
    /// Number of units
    pub quantity: i32,
    /// Order date, `YYYY-MM-DD`
    pub order_date: NaiveDate,
}

/// Parses a seed document from a TOML string.
pub fn parse_seed(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid seed document.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    debug!("Loading seed data from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {path_ref:?}: {e}"),
    })?;
    parse_seed(&contents)
}

/// Returns the seed data compiled into the binary.
pub fn builtin_seed() -> Result<SeedConfig> {
    parse_seed(BUILTIN_SEED)
}

/// Loads seed data from `SEED_CONFIG` if set, otherwise the built-in seed.
pub fn load_default_seed() -> Result<SeedConfig> {
    match std::env::var("SEED_CONFIG") {
        Ok(path) => load_seed(path),
        Err(_) => builtin_seed(),
    }
}

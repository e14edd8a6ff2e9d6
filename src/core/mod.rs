//! Core business logic - store seeding, reporting queries and price updates.
//!
//! Every function takes a generic `ConnectionTrait` so it runs equally against a plain
//! connection or inside the session transaction opened by the menu.

/// Product lookups and category-wide price changes
pub mod product;
/// Aggregate sales and inventory reports
pub mod report;
/// Idempotent insertion of reference data
pub mod seed;

/// Store connection and schema creation
pub mod database;

/// Seed data loading from TOML
pub mod seed;

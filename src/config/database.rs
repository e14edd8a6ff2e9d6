//! Database configuration module.
//!
//! Handles the `SQLite` store connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`, so the
//! schema always matches the Rust models, and every statement is issued with
//! `IF NOT EXISTS` so initialization can run on every start-up.

use crate::entities::{Customer, Order, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Store used when `DATABASE_URL` is not set. `mode=rwc` creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://electronics_store.db?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens a connection to the store at `database_url`.
#[instrument]
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening store connection");
    let db = Database::connect(database_url).await?;
    info!("Store connection opened");
    Ok(db)
}

/// Establishes a connection to the store named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    connect(&get_database_url()).await
}

/// Creates the products, customers and orders tables if they do not already exist.
///
/// Products and customers are created first because orders carry foreign keys to both.
#[instrument(skip(db))]
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    create_table_if_missing(db, &schema, Product).await?;
    create_table_if_missing(db, &schema, Customer).await?;
    create_table_if_missing(db, &schema, Order).await?;

    info!("Store tables ensured");
    Ok(())
}

async fn create_table_if_missing<C, E>(db: &C, schema: &Schema, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(db.get_database_backend().build(&statement)).await?;
    Ok(())
}

//! Shared test utilities.
//!
//! Helpers for setting up in-memory stores and creating rows with explicit values.

use crate::{
    config::{
        database::{connect, create_tables},
        seed::builtin_seed,
    },
    core::seed::fill_database,
    entities::{customer, order, product},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all store tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database holding the built-in reference data.
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    fill_database(&db, &builtin_seed()?).await?;
    Ok(db)
}

/// Inserts a product directly, bypassing the seed checks.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
    price: f64,
) -> Result<product::Model> {
    product::ActiveModel {
        name: Set(name.to_string()),
        category: Set(category.to_string()),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a customer directly, bypassing the seed checks.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<customer::Model> {
    customer::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts an order directly, bypassing the seed checks.
pub async fn create_test_order(
    db: &DatabaseConnection,
    customer_id: i64,
    product_id: i64,
    quantity: i32,
    order_date: NaiveDate,
) -> Result<order::Model> {
    order::ActiveModel {
        customer_id: Set(customer_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        order_date: Set(order_date),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

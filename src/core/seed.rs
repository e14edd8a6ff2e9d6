//! Seed loading - idempotent insertion of the reference data set.
//!
//! Each row is inserted only when its natural key is absent: products by name,
//! customers by email, orders by the (customer, product, date) tuple. Running the
//! loader any number of times leaves exactly one copy of every seeded row.

use crate::{
    config::seed::{CustomerSeed, OrderSeed, ProductSeed, SeedConfig},
    core::product::get_product_by_name,
    entities::{Customer, Order, customer, order, product},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Number of rows actually inserted by one [`fill_database`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Products inserted
    pub products: usize,
    /// Customers inserted
    pub customers: usize,
    /// Orders inserted
    pub orders: usize,
}

impl SeedSummary {
    /// Total number of inserted rows
    #[must_use]
    pub const fn total(&self) -> usize {
        self.products + self.customers + self.orders
    }
}

/// Inserts every missing row of `seed` inside one transaction and commits it.
///
/// # Errors
/// Returns an error if a seed order names a product or customer that is neither in
/// the seed nor already stored, or if any database operation fails. On error nothing
/// from this run is committed.
#[instrument(skip(db, seed))]
pub async fn fill_database<C>(db: &C, seed: &SeedConfig) -> Result<SeedSummary>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    for item in &seed.products {
        if insert_product_if_missing(&txn, item).await? {
            summary.products += 1;
        }
    }
    for item in &seed.customers {
        if insert_customer_if_missing(&txn, item).await? {
            summary.customers += 1;
        }
    }
    for item in &seed.orders {
        if insert_order_if_missing(&txn, item).await? {
            summary.orders += 1;
        }
    }

    txn.commit().await?;
    info!(
        "Seeding inserted {} product(s), {} customer(s), {} order(s)",
        summary.products, summary.customers, summary.orders
    );
    Ok(summary)
}

async fn insert_product_if_missing<C>(db: &C, item: &ProductSeed) -> Result<bool>
where
    C: ConnectionTrait,
{
    if get_product_by_name(db, &item.name).await?.is_some() {
        debug!("Product '{}' already exists. Skipping.", item.name);
        return Ok(false);
    }

    product::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        price: Set(item.price),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(true)
}

/// Finds a customer by email.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_customer_by_email<C>(db: &C, email: &str) -> Result<Option<customer::Model>>
where
    C: ConnectionTrait,
{
    Customer::find()
        .filter(customer::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

async fn insert_customer_if_missing<C>(db: &C, item: &CustomerSeed) -> Result<bool>
where
    C: ConnectionTrait,
{
    if get_customer_by_email(db, &item.email).await?.is_some() {
        debug!("Customer '{}' already exists. Skipping.", item.email);
        return Ok(false);
    }

    customer::ActiveModel {
        first_name: Set(item.first_name.clone()),
        last_name: Set(item.last_name.clone()),
        email: Set(item.email.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(true)
}

async fn insert_order_if_missing<C>(db: &C, item: &OrderSeed) -> Result<bool>
where
    C: ConnectionTrait,
{
    let customer = get_customer_by_email(db, &item.customer_email)
        .await?
        .ok_or_else(|| Error::SeedReference {
            kind: "customer",
            key: item.customer_email.clone(),
        })?;
    let product = get_product_by_name(db, &item.product_name)
        .await?
        .ok_or_else(|| Error::SeedReference {
            kind: "product",
            key: item.product_name.clone(),
        })?;

    let existing = Order::find()
        .filter(order::Column::CustomerId.eq(customer.id))
        .filter(order::Column::ProductId.eq(product.id))
        .filter(order::Column::OrderDate.eq(item.order_date))
        .one(db)
        .await?;
    if existing.is_some() {
        debug!(
            "Order of '{}' by '{}' on {} already exists. Skipping.",
            item.product_name, item.customer_email, item.order_date
        );
        return Ok(false);
    }

    order::ActiveModel {
        customer_id: Set(customer.id),
        product_id: Set(product.id),
        quantity: Set(item.quantity),
        order_date: Set(item.order_date),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::{database::create_tables, seed::builtin_seed},
        entities::Product,
        test_utils::*,
    };
    use chrono::NaiveDate;
    use sea_orm::{DatabaseConnection, PaginatorTrait};

    async fn row_counts(db: &DatabaseConnection) -> Result<(u64, u64, u64)> {
        Ok((
            Product::find().count(db).await?,
            Customer::find().count(db).await?,
            Order::find().count(db).await?,
        ))
    }

    #[tokio::test]
    async fn test_fill_database_inserts_reference_data() -> Result<()> {
        let db = setup_test_db().await?;
        let summary = fill_database(&db, &builtin_seed()?).await?;

        assert_eq!(
            summary,
            SeedSummary {
                products: 6,
                customers: 4,
                orders: 6,
            }
        );
        assert_eq!(row_counts(&db).await?, (6, 4, 6));
        Ok(())
    }

    #[tokio::test]
    async fn test_initialization_twice_creates_no_duplicates() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = builtin_seed()?;

        fill_database(&db, &seed).await?;
        create_tables(&db).await?;
        let second = fill_database(&db, &seed).await?;

        assert_eq!(second.total(), 0);
        assert_eq!(row_counts(&db).await?, (6, 4, 6));
        Ok(())
    }

    #[tokio::test]
    async fn test_fill_database_only_adds_missing_rows() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "MacBook Pro", "Laptops", 44999.0).await?;

        let summary = fill_database(&db, &builtin_seed()?).await?;

        assert_eq!(summary.products, 5);
        assert_eq!(row_counts(&db).await?, (6, 4, 6));
        Ok(())
    }

    #[tokio::test]
    async fn test_same_customer_and_product_on_new_date_is_inserted() -> Result<()> {
        let db = setup_seeded_db().await?;
        let mut seed = builtin_seed()?;
        let mut repeat = seed.orders[0].clone();
        repeat.order_date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        seed.orders.push(repeat);

        let summary = fill_database(&db, &seed).await?;

        assert_eq!(summary.orders, 1);
        assert_eq!(row_counts(&db).await?.2, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_order_reference_rolls_back() -> Result<()> {
        let db = setup_test_db().await?;
        let mut seed = builtin_seed()?;
        seed.orders[0].product_name = "Nokia 3310".to_string();

        let result = fill_database(&db, &seed).await;

        assert!(matches!(
            result.unwrap_err(),
            Error::SeedReference {
                kind: "product",
                key: _
            }
        ));
        assert_eq!(row_counts(&db).await?, (0, 0, 0));
        Ok(())
    }
}

//! Product business logic - lookups and category-wide price changes.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*, sea_query::Expr};
use tracing::{info, instrument};

/// Category label the smartphone price update applies to.
pub const SMARTPHONE_CATEGORY: &str = "Smartphones";

/// Multiplier applied by [`update_smartphone_prices`] (a 10% increase).
pub const SMARTPHONE_PRICE_FACTOR: f64 = 1.10;

/// Finds a product by its name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name<C>(db: &C, name: &str) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all products in a category, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_products_by_category<C>(db: &C, category: &str) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find()
        .filter(product::Column::Category.eq(category))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Multiplies the price of every product in `category` by `factor` in a single
/// `UPDATE`, returning the number of rows changed.
///
/// # Errors
/// Returns an error if:
/// - `factor` is zero, negative, or not finite
/// - The database update fails
#[instrument(skip(db))]
pub async fn raise_category_prices<C>(db: &C, category: &str, factor: f64) -> Result<u64>
where
    C: ConnectionTrait,
{
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidPriceFactor { factor });
    }

    let result = Product::update_many()
        .col_expr(
            product::Column::Price,
            Expr::col(product::Column::Price).mul(factor),
        )
        .filter(product::Column::Category.eq(category))
        .exec(db)
        .await?;

    info!(
        "Repriced {} product(s) in category '{}'",
        result.rows_affected, category
    );
    Ok(result.rows_affected)
}

/// Raises every smartphone price by 10%.
///
/// Affects zero or more rows; products in other categories are untouched.
pub async fn update_smartphone_prices<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    raise_category_prices(db, SMARTPHONE_CATEGORY, SMARTPHONE_PRICE_FACTOR).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[tokio::test]
    async fn test_raise_category_prices_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for factor in [0.0, -1.1, f64::NAN, f64::INFINITY] {
            let result = raise_category_prices(&db, SMARTPHONE_CATEGORY, factor).await;
            assert!(matches!(
                result.unwrap_err(),
                Error::InvalidPriceFactor { factor: _ }
            ));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_update_smartphone_prices_only_touches_smartphones() -> Result<()> {
        let db = setup_seeded_db().await?;

        let updated = update_smartphone_prices(&db).await?;
        assert_eq!(updated, 2);

        let galaxy = get_product_by_name(&db, "Samsung Galaxy M32").await?.unwrap();
        let xiaomi = get_product_by_name(&db, "Xiaomi Mi 9").await?.unwrap();
        assert_close(galaxy.price, 7999.0 * 1.10);
        assert_close(xiaomi.price, 10499.0 * 1.10);

        let macbook = get_product_by_name(&db, "MacBook Pro").await?.unwrap();
        let tab = get_product_by_name(&db, "Lenovo Yoga Tab3").await?.unwrap();
        assert_close(macbook.price, 44999.0);
        assert_close(tab.price, 15799.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_smartphone_prices_twice_compounds() -> Result<()> {
        let db = setup_seeded_db().await?;

        update_smartphone_prices(&db).await?;
        update_smartphone_prices(&db).await?;

        let phones = get_products_by_category(&db, SMARTPHONE_CATEGORY).await?;
        assert_eq!(phones.len(), 2);
        assert_close(phones[0].price, 7999.0 * 1.21);
        assert_close(phones[1].price, 10499.0 * 1.21);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_smartphone_prices_with_no_smartphones() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "ThinkPad X1", "Laptops", 1500.0).await?;

        let updated = update_smartphone_prices(&db).await?;
        assert_eq!(updated, 0);

        let laptop = get_product_by_name(&db, "ThinkPad X1").await?.unwrap();
        assert_close(laptop.price, 1500.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_name_missing() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_product_by_name(&db, "Nokia 3310").await?.is_none());
        Ok(())
    }
}

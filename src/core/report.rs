//! Report generation business logic.
//!
//! Each report is a single aggregate `SELECT` built with `SeaORM`'s query builder and
//! returns structured data; formatting for display lives in the menu layer.

use crate::{
    entities::{Customer, Order, Product, customer, order, product},
    errors::Result,
};
use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
    sea_query::{Expr, Func, SimpleExpr},
};
use tracing::instrument;

/// Number of orders placed by one customer.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CustomerOrderCount {
    /// Customer's given name
    pub first_name: String,
    /// Customer's family name
    pub last_name: String,
    /// How many orders the customer placed
    pub order_count: i64,
}

/// Number of orders placed for products in one category.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CategoryOrderCount {
    /// Category label
    pub category: String,
    /// Orders for products in the category
    pub order_count: i64,
}

/// Number of products listed in one category.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CategoryProductCount {
    /// Category label
    pub category: String,
    /// Products in the category
    pub product_count: i64,
}

/// `products.price * orders.quantity` for one order row.
fn line_total() -> SimpleExpr {
    Expr::col((Product, product::Column::Price)).mul(Expr::col((Order, order::Column::Quantity)))
}

fn order_count() -> SimpleExpr {
    Func::count(Expr::col((Order, order::Column::Id))).into()
}

/// Sums price × quantity over every order. Returns 0 when there are no orders.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn total_sales<C>(db: &C) -> Result<f64>
where
    C: ConnectionTrait,
{
    let total: Option<Option<f64>> = Order::find()
        .select_only()
        .column_as(SimpleExpr::from(Func::sum(line_total())), "total_sales")
        .join(JoinType::InnerJoin, order::Relation::Product.def())
        .into_tuple()
        .one(db)
        .await?;
    Ok(total.flatten().unwrap_or(0.0))
}

/// Counts orders per customer. Customers without orders are not listed.
///
/// Rows are ordered by customer id.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn orders_per_customer<C>(db: &C) -> Result<Vec<CustomerOrderCount>>
where
    C: ConnectionTrait,
{
    Customer::find()
        .select_only()
        .column(customer::Column::FirstName)
        .column(customer::Column::LastName)
        .column_as(order_count(), "order_count")
        .join(JoinType::InnerJoin, customer::Relation::Orders.def())
        .group_by(customer::Column::Id)
        .group_by(customer::Column::FirstName)
        .group_by(customer::Column::LastName)
        .order_by_asc(customer::Column::Id)
        .into_model::<CustomerOrderCount>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Averages price × quantity over every order. Returns 0 when there are no orders.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn average_order_value<C>(db: &C) -> Result<f64>
where
    C: ConnectionTrait,
{
    let average: Option<Option<f64>> = Order::find()
        .select_only()
        .column_as(SimpleExpr::from(Func::avg(line_total())), "average_order_value")
        .join(JoinType::InnerJoin, order::Relation::Product.def())
        .into_tuple()
        .one(db)
        .await?;
    Ok(average.flatten().unwrap_or(0.0))
}

/// Finds the category whose products were ordered most often.
///
/// Ties are resolved by the store's own ordering and should not be relied on.
/// Returns `None` when there are no orders.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn most_popular_category<C>(db: &C) -> Result<Option<CategoryOrderCount>>
where
    C: ConnectionTrait,
{
    Order::find()
        .select_only()
        .column(product::Column::Category)
        .column_as(order_count(), "order_count")
        .join(JoinType::InnerJoin, order::Relation::Product.def())
        .group_by(product::Column::Category)
        .order_by_desc(order_count())
        .into_model::<CategoryOrderCount>()
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts products per category, ordered by category label.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn products_per_category<C>(db: &C) -> Result<Vec<CategoryProductCount>>
where
    C: ConnectionTrait,
{
    Product::find()
        .select_only()
        .column(product::Column::Category)
        .column_as(
            SimpleExpr::from(Func::count(Expr::col((Product, product::Column::Id)))),
            "product_count",
        )
        .group_by(product::Column::Category)
        .order_by_asc(product::Column::Category)
        .into_model::<CategoryProductCount>()
        .all(db)
        .await
        .map_err(Into::into)
}

//! Text rendering for report results.

use crate::core::report::{CategoryOrderCount, CategoryProductCount, CustomerOrderCount};
use crate::menu::MenuChoice;
use std::fmt::Write;

/// Renders the numbered menu, preceded by a blank line.
#[must_use]
pub fn menu() -> String {
    let mut text = String::from("\nMenu:\n");
    for choice in MenuChoice::ALL {
        let _ = writeln!(text, "{}. {}", choice.number(), choice.label());
    }
    text
}

/// Formats an amount as dollars with two decimals, e.g. `$35098.50`.
#[must_use]
pub fn currency(amount: f64) -> String {
    format!("${amount:.2}")
}

#[must_use]
pub fn total_sales(total: f64) -> String {
    format!("Total sales: {}", currency(total))
}

#[must_use]
pub fn average_order_value(average: f64) -> String {
    format!("Average order value: {}", currency(average))
}

#[must_use]
pub fn customer_order_count(row: &CustomerOrderCount) -> String {
    format!(
        "{} {}: {} orders",
        row.first_name, row.last_name, row.order_count
    )
}

#[must_use]
pub fn most_popular_category(top: Option<&CategoryOrderCount>) -> String {
    match top {
        Some(top) => format!(
            "Most popular category: {} ({} orders)",
            top.category, top.order_count
        ),
        None => "No orders yet".to_string(),
    }
}

#[must_use]
pub fn category_product_count(row: &CategoryProductCount) -> String {
    format!("{}: {} products", row.category, row.product_count)
}

#[must_use]
pub fn prices_updated(rows: u64) -> String {
    format!("Smartphone prices updated ({rows} products)")
}

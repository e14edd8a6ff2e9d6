//! Interactive menu - reads numbered choices, runs the matching report or update,
//! and prints the result until the user exits.
//!
//! A session wraps the whole menu in one database transaction. Reports run inside it,
//! so they see the session's own price updates, and the exit prompt decides whether
//! those updates are committed or rolled back. Input and output are generic so the
//! loop can be driven from tests.

/// Menu entries and input parsing
pub mod choice;
/// Result formatting
pub mod format;

pub use choice::{MenuChoice, is_affirmative};

use crate::{
    core::{product, report},
    errors::Result,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// What the user decided to do with the session's changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Keep the changes
    Commit,
    /// Throw the changes away
    Discard,
}

/// Runs one interactive session against `db`.
///
/// Begins a transaction, runs [`run_menu`] inside it, then commits or rolls back
/// according to the user's answer. If the menu fails the transaction is dropped and
/// its changes are rolled back.
///
/// # Errors
/// Returns an error if a query fails or the input/output streams fail.
#[instrument(skip_all)]
pub async fn run_session<R, W>(
    db: &DatabaseConnection,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let txn = db.begin().await?;
    let outcome = run_menu(&txn, input, output).await?;

    match outcome {
        SessionOutcome::Commit => {
            txn.commit().await?;
            info!("Session changes committed");
            writeln!(output, "Changes saved")?;
        }
        SessionOutcome::Discard => {
            txn.rollback().await?;
            info!("Session changes rolled back");
            writeln!(output, "Changes discarded")?;
        }
    }
    Ok(outcome)
}

/// Shows the menu and dispatches choices until the user exits or input ends.
///
/// Unrecognised input prints `Invalid choice` and re-prompts. End of input is
/// treated as exiting without saving.
///
/// # Errors
/// Returns an error if a query fails or the input/output streams fail.
pub async fn run_menu<C, R, W>(db: &C, input: &mut R, output: &mut W) -> Result<SessionOutcome>
where
    C: ConnectionTrait,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", format::menu())?;
        let Some(line) = prompt(input, output, "Choose an option (1-7): ")? else {
            writeln!(output)?;
            return Ok(SessionOutcome::Discard);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => return confirm_save(input, output),
            Some(choice) => {
                debug!("Running menu choice {:?}", choice);
                run_choice(db, choice, output).await?;
            }
            None => writeln!(output, "Invalid choice")?,
        }
    }
}

async fn run_choice<C, W>(db: &C, choice: MenuChoice, output: &mut W) -> Result<()>
where
    C: ConnectionTrait,
    W: Write,
{
    match choice {
        MenuChoice::TotalSales => {
            let total = report::total_sales(db).await?;
            writeln!(output, "{}", format::total_sales(total))?;
        }
        MenuChoice::OrdersPerCustomer => {
            let rows = report::orders_per_customer(db).await?;
            if rows.is_empty() {
                writeln!(output, "No orders yet")?;
            }
            for row in &rows {
                writeln!(output, "{}", format::customer_order_count(row))?;
            }
        }
        MenuChoice::AverageOrderValue => {
            let average = report::average_order_value(db).await?;
            writeln!(output, "{}", format::average_order_value(average))?;
        }
        MenuChoice::MostPopularCategory => {
            let top = report::most_popular_category(db).await?;
            writeln!(output, "{}", format::most_popular_category(top.as_ref()))?;
        }
        MenuChoice::ProductsPerCategory => {
            for row in &report::products_per_category(db).await? {
                writeln!(output, "{}", format::category_product_count(row))?;
            }
        }
        MenuChoice::UpdateSmartphonePrices => {
            let updated = product::update_smartphone_prices(db).await?;
            writeln!(output, "{}", format::prices_updated(updated))?;
        }
        MenuChoice::Exit => {}
    }
    Ok(())
}

fn confirm_save<R, W>(input: &mut R, output: &mut W) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let answer = prompt(input, output, "Save changes? (yes/no): ")?.unwrap_or_default();
    if is_affirmative(&answer) {
        Ok(SessionOutcome::Commit)
    } else {
        Ok(SessionOutcome::Discard)
    }
}

/// Writes `message` and reads one line. `None` means end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

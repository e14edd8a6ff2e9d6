use dotenvy::dotenv;
use store_reports::{
    config::{database, seed},
    core::seed::fill_database,
    errors::Result,
    menu,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing on stderr so it never interleaves with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Open the store and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to open store: {}", e))?;
    database::create_tables(&db).await?;

    // 4. Seed reference data (skips rows that are already present)
    let seed_data = seed::load_default_seed()?;
    let summary = fill_database(&db, &seed_data)
        .await
        .inspect_err(|e| error!("Failed to seed store: {}", e))?;
    info!("Seeded {} new row(s)", summary.total());

    // 5. Run the interactive session
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run_session(&db, &mut stdin.lock(), &mut stdout.lock()).await?;

    db.close().await?;
    Ok(())
}

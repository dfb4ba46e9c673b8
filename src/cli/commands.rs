pub mod export;
pub mod import;
pub mod initdb;
pub mod list;
pub mod passbook;
pub mod summary;

pub use export::export_passbook;
pub use import::import_records;
pub use initdb::init_database;
pub use list::list_transactions;
pub use passbook::show_passbook;
pub use summary::print_summary;

use anyhow::{Context, Result, bail};
use compute::default_aggregator;
use compute::ledger::Ledger;
use sea_orm::Database;
use tracing::debug;

/// Connects to the database and aggregates every source into a ledger.
///
/// Failed sources are logged by the aggregator. The command only fails when
/// no source at all could be read.
pub(crate) async fn load_ledger(database_url: &str) -> Result<Ledger> {
    debug!("Database URL: {}", database_url);
    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let ledger = default_aggregator(db).aggregate().await;
    if ledger.all_sources_failed() {
        bail!("No ledger source could be read; has the database been initialized?");
    }
    Ok(ledger)
}

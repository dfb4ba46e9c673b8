use anyhow::Result;
use compute::converters::view_to_summary;
use compute::ledger::{SortOrder, TransactionFilter};

use super::load_ledger;

/// Prints the newest-first view with totals as pretty JSON.
pub async fn print_summary(database_url: &str, filter: &TransactionFilter) -> Result<()> {
    let ledger = load_ledger(database_url).await?;
    let view = ledger.view(filter, SortOrder::NewestFirst);
    let summary = view_to_summary(&view, ledger.failures());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

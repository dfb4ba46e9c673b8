use anyhow::{Context, Result};
use common::{MoneyFormat, PassbookRowDto};
use compute::converters::row_to_dto;
use compute::ledger::{LedgerRow, TransactionFilter};
use std::fs::File;
use std::io::Write;
use tracing::{debug, info};

use super::load_ledger;
use crate::config::AppConfig;

pub async fn export_passbook(
    database_url: &str,
    filter: &TransactionFilter,
    output: &str,
    config: &AppConfig,
) -> Result<()> {
    info!("Exporting passbook to {}", output);
    let ledger = load_ledger(database_url).await?;
    let rows = ledger.passbook(filter);
    debug!("Writing {} passbook rows", rows.len());

    let file = File::create(output).with_context(|| format!("Failed to create file: {}", output))?;
    write_passbook_csv(file, &rows, &config.money_format(), &config.date_format)?;

    info!("Exported {} rows to {}", rows.len(), output);
    Ok(())
}

/// Writes passbook rows as CSV with a header line.
pub fn write_passbook_csv<W: Write>(
    writer: W,
    rows: &[LedgerRow],
    money: &MoneyFormat,
    date_pattern: &str,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        // serialize() only emits headers together with the first record
        wtr.write_record(PassbookRowDto::HEADERS)?;
    }
    for row in rows {
        wtr.serialize(row_to_dto(row, money, date_pattern))
            .context("Failed to write CSV row")?;
    }
    wtr.flush()?;
    Ok(())
}

use anyhow::Result;
use common::{MoneyFormat, PassbookRowDto, format_amount};
use compute::converters::row_to_dto;
use compute::ledger::{LedgerTotals, SortOrder, TransactionFilter};
use tracing::info;

use super::load_ledger;
use crate::config::AppConfig;

pub async fn show_passbook(database_url: &str, filter: &TransactionFilter, config: &AppConfig) -> Result<()> {
    let ledger = load_ledger(database_url).await?;
    let money = config.money_format();

    let rows: Vec<PassbookRowDto> = ledger
        .passbook(filter)
        .iter()
        .map(|row| row_to_dto(row, &money, &config.date_format))
        .collect();
    info!("Passbook has {} rows", rows.len());

    print!("{}", render_passbook(&rows));
    print!("{}", render_totals(&ledger.view(filter, SortOrder::OldestFirst).totals, &money));
    Ok(())
}

pub(crate) fn render_passbook(rows: &[PassbookRowDto]) -> String {
    let mut out = format!(
        "{:>5}  {:<10}  {:<40}  {:<14}  {:<12}  {:<8}  {:>14}  {:>14}  {:>14}\n",
        "S.No", "Date", "Description", "Category", "Reference", "Status", "Debit", "Credit", "Balance"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>5}  {:<10}  {:<40}  {:<14}  {:<12}  {:<8}  {:>14}  {:>14}  {:>14}\n",
            row.sequence_number,
            row.date,
            truncate(&row.description, 40),
            row.category,
            truncate(&row.reference, 12),
            row.status,
            row.debit,
            row.credit,
            row.running_balance
        ));
    }
    out
}

pub(crate) fn render_totals(totals: &LedgerTotals, money: &MoneyFormat) -> String {
    format!(
        "\nTotal credits: {}\nTotal debits:  {}\nBalance:       {}\n",
        format_amount(totals.total_credits, money),
        format_amount(totals.total_debits, money),
        format_amount(totals.balance, money)
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

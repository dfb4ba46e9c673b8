use anyhow::Result;
use common::{MoneyFormat, format_amount, format_date};
use compute::ledger::{LedgerView, SortOrder, TransactionFilter};
use model::transaction::TransactionKind;

use super::load_ledger;
use super::passbook::render_totals;
use crate::config::AppConfig;

pub async fn list_transactions(database_url: &str, filter: &TransactionFilter, config: &AppConfig) -> Result<()> {
    let ledger = load_ledger(database_url).await?;
    let view = ledger.view(filter, SortOrder::NewestFirst);
    let money = config.money_format();

    print!("{}", render_list(&view, &money, &config.date_format));
    print!("{}", render_totals(&view.totals, &money));
    print!("{}", render_category_totals(&view, &money));
    Ok(())
}

fn render_list(view: &LedgerView, money: &MoneyFormat, date_pattern: &str) -> String {
    if view.transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut out = String::new();
    for transaction in &view.transactions {
        let sign = if transaction.is_credit() { "+" } else { "-" };
        out.push_str(&format!(
            "{:<10}  {:<40}  {:<14}  {:<8}  {}{}\n",
            format_date(transaction.occurred_on(), date_pattern),
            transaction.description(),
            transaction.category(),
            transaction.status(),
            sign,
            format_amount(transaction.amount(), money)
        ));
    }
    out
}

fn render_category_totals(view: &LedgerView, money: &MoneyFormat) -> String {
    let mut out = String::from("\nBy category:\n");
    for kind in TransactionKind::ALL {
        out.push_str(&format!(
            "  {:<14} {}\n",
            kind.category(),
            format_amount(view.totals.category_totals.get(kind), money)
        ));
    }
    out
}

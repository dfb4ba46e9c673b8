//! Conversion of computed ledger structures into the transport types in `common`.

use common::{
    CategoryTotalsDto, LedgerSummary, MoneyFormat, PassbookRowDto, TransactionDto,
    format_amount, format_date,
};
use model::transaction::{Polarity, Transaction};

use crate::ledger::{CategoryTotals, LedgerRow, LedgerView};
use crate::sources::SourceFailure;

pub fn transaction_to_dto(transaction: &Transaction) -> TransactionDto {
    TransactionDto {
        id: transaction.id(),
        source: transaction.source().name().to_string(),
        kind: transaction.kind().as_str().to_string(),
        occurred_on: transaction.occurred_on(),
        description: transaction.description().to_string(),
        amount: transaction.amount(),
        category: transaction.category().to_string(),
        status: transaction.status().to_string(),
        reference: transaction.reference().to_string(),
        polarity: match transaction.polarity() {
            Polarity::Credit => "credit".to_string(),
            Polarity::Debit => "debit".to_string(),
        },
    }
}

pub fn category_totals_to_dto(totals: &CategoryTotals) -> CategoryTotalsDto {
    CategoryTotalsDto {
        maintenance: totals.maintenance,
        vendor: totals.vendor,
        deposit: totals.deposit,
        society_room: totals.society_room,
    }
}

/// Builds the consumer-facing summary from a view, listing any sources that
/// could not be read.
pub fn view_to_summary(view: &LedgerView, failures: &[SourceFailure]) -> LedgerSummary {
    LedgerSummary {
        transactions: view.transactions.iter().map(transaction_to_dto).collect(),
        total_credits: view.totals.total_credits,
        total_debits: view.totals.total_debits,
        balance: view.totals.balance,
        category_totals: category_totals_to_dto(&view.totals.category_totals),
        failed_sources: failures
            .iter()
            .map(|f| f.source.name().to_string())
            .collect(),
    }
}

/// Formats a passbook row for export. Zero debit/credit cells are left blank,
/// as in a bank passbook.
pub fn row_to_dto(row: &LedgerRow, money: &MoneyFormat, date_pattern: &str) -> PassbookRowDto {
    let cell = |amount: rust_decimal::Decimal| {
        if amount.is_zero() {
            String::new()
        } else {
            format_amount(amount, money)
        }
    };

    PassbookRowDto {
        sequence_number: row.sequence_number,
        date: format_date(row.transaction.occurred_on(), date_pattern),
        description: row.transaction.description().to_string(),
        category: row.transaction.category().to_string(),
        reference: row.transaction.reference().to_string(),
        status: row.transaction.status().to_string(),
        debit: cell(row.debit_amount),
        credit: cell(row.credit_amount),
        running_balance: format_amount(row.running_balance, money),
    }
}

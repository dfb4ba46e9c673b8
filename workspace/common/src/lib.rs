//! Common transport-layer types shared by the ledger computation and its
//! consumers (terminal output, CSV export, JSON summaries).
//! Amounts travel as decimal strings so no precision is lost on the way out.

pub mod format;

pub use format::{DigitGrouping, MoneyFormat, format_amount, format_date, is_valid_date_pattern};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized ledger entry as handed to a presentation consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: i32,
    pub source: String,
    pub kind: String,
    pub occurred_on: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub status: String,
    pub reference: String,
    /// `credit` or `debit`
    pub polarity: String,
}

/// Per-kind subtotals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotalsDto {
    pub maintenance: Decimal,
    pub vendor: Decimal,
    pub deposit: Decimal,
    pub society_room: Decimal,
}

/// The derived ledger structure exposed to consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub transactions: Vec<TransactionDto>,
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub balance: Decimal,
    pub category_totals: CategoryTotalsDto,
    /// Names of sources that could not be read. Empty when the ledger is complete.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_sources: Vec<String>,
}

/// A passbook line, already formatted for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassbookRowDto {
    #[serde(rename = "S.No")]
    pub sequence_number: usize,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Debit")]
    pub debit: String,
    #[serde(rename = "Credit")]
    pub credit: String,
    #[serde(rename = "Balance")]
    pub running_balance: String,
}

impl PassbookRowDto {
    /// Column headings, in serialization order.
    pub const HEADERS: [&'static str; 9] = [
        "S.No",
        "Date",
        "Description",
        "Category",
        "Reference",
        "Status",
        "Debit",
        "Credit",
        "Balance",
    ];
}

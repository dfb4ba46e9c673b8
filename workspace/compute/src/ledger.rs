//! The aggregated ledger and the views derived from it.

pub mod filter;
pub mod passbook;
pub mod totals;

use model::transaction::{SourceKind, Transaction};

use crate::sources::SourceFailure;

pub use filter::TransactionFilter;
pub use passbook::{LedgerRow, passbook_rows};
pub use totals::{CategoryTotals, LedgerTotals};

/// Display ordering of transactions. Sorting is stable, so transactions on
/// the same date keep their source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Table view.
    #[default]
    NewestFirst,
    /// Passbook view.
    OldestFirst,
}

/// Sorts transactions by date in place.
pub fn sort_transactions(transactions: &mut [Transaction], order: SortOrder) {
    match order {
        SortOrder::OldestFirst => transactions.sort_by_key(|t| t.occurred_on()),
        SortOrder::NewestFirst => {
            transactions.sort_by(|a, b| b.occurred_on().cmp(&a.occurred_on()))
        }
    }
}

/// The result of one aggregation pass: every normalized transaction in source
/// order, plus the sources that could not be read.
///
/// An empty ledger with no failures means the society has no transactions;
/// an empty ledger where every source failed means nothing could be read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    failures: Vec<SourceFailure>,
}

/// A filtered, ordered slice of the ledger with totals computed over exactly
/// the transactions it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub transactions: Vec<Transaction>,
    pub totals: LedgerTotals,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, failures: Vec<SourceFailure>) -> Self {
        Self {
            transactions,
            failures,
        }
    }

    /// Transactions in source order (maintenance, invoices, billing history,
    /// deposits, rooms), each source in its fetch order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// True when every source was read.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn all_sources_failed(&self) -> bool {
        SourceKind::ALL
            .iter()
            .all(|kind| self.failures.iter().any(|f| f.source == *kind))
    }

    /// Totals over the whole, unfiltered ledger.
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals::from_transactions(&self.transactions)
    }

    pub fn view(&self, filter: &TransactionFilter, order: SortOrder) -> LedgerView {
        let mut transactions = filter.apply(&self.transactions);
        sort_transactions(&mut transactions, order);
        let totals = LedgerTotals::from_transactions(&transactions);
        LedgerView {
            transactions,
            totals,
        }
    }

    /// Oldest-first rows with a running balance over the filtered transactions.
    pub fn passbook(&self, filter: &TransactionFilter) -> Vec<LedgerRow> {
        passbook_rows(&filter.apply(&self.transactions))
    }
}

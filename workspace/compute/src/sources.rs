//! Read access to the record collections the ledger is built from.

pub mod database;

use async_trait::async_trait;
use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};
use model::transaction::SourceKind;

use crate::error::Result;

pub use database::DatabaseSources;

/// One read per source collection.
///
/// Implementations return records already deserialized; an `Err` is the only
/// failure signal. Reads are independent of each other and may run
/// concurrently.
#[async_trait]
pub trait LedgerSources: Send + Sync {
    /// Maintenance payments with status `paid`.
    async fn maintenance_payments(&self) -> Result<Vec<maintenance_payment::Model>>;

    /// Vendor invoices with status `paid` or `partial`.
    async fn vendor_invoices(&self) -> Result<Vec<vendor_invoice::Model>>;

    async fn vendor_billing_history(&self) -> Result<Vec<vendor_billing_history::Model>>;

    async fn renovation_deposits(&self) -> Result<Vec<renovation_deposit::Model>>;

    async fn society_room_finances(&self) -> Result<Vec<society_room_finance::Model>>;
}

/// A source read that failed during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub message: String,
}

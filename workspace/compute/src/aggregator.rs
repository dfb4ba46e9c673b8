use model::transaction::{SourceKind, Transaction};
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::normalize;
use crate::sources::{LedgerSources, SourceFailure};

/// Builds a [`Ledger`] from the five source collections.
///
/// All reads are issued together and awaited as a group. A read that fails is
/// logged and contributes no transactions; it never aborts the other sources
/// and never surfaces as an error to the caller.
pub struct LedgerAggregator<S> {
    sources: S,
}

impl<S: LedgerSources> LedgerAggregator<S> {
    pub fn new(sources: S) -> Self {
        Self { sources }
    }

    #[instrument(skip(self))]
    pub async fn aggregate(&self) -> Ledger {
        debug!("Fetching {} ledger sources", SourceKind::ALL.len());

        let (maintenance, invoices, billing, deposits, rooms) = tokio::join!(
            self.sources.maintenance_payments(),
            self.sources.vendor_invoices(),
            self.sources.vendor_billing_history(),
            self.sources.renovation_deposits(),
            self.sources.society_room_finances(),
        );

        let mut collector = Collector::default();
        collector.collect(
            SourceKind::MaintenancePayments,
            maintenance,
            normalize::maintenance_payment,
        );
        collector.collect(SourceKind::VendorInvoices, invoices, normalize::vendor_invoice);
        collector.collect(SourceKind::VendorBillingHistory, billing, normalize::vendor_billing);
        collector.collect(
            SourceKind::RenovationDeposits,
            deposits,
            normalize::renovation_deposit,
        );
        collector.collect(SourceKind::SocietyRooms, rooms, normalize::society_room);

        let ledger = collector.finish();
        info!(
            transactions = ledger.transactions().len(),
            failed_sources = ledger.failures().len(),
            "Ledger aggregated"
        );
        ledger
    }
}

#[derive(Default)]
struct Collector {
    transactions: Vec<Transaction>,
    failures: Vec<SourceFailure>,
}

impl Collector {
    fn collect<R>(
        &mut self,
        source: SourceKind,
        fetched: Result<Vec<R>>,
        normalize: fn(&R) -> Option<Transaction>,
    ) {
        match fetched {
            Ok(records) => {
                let before = self.transactions.len();
                self.transactions
                    .extend(records.iter().filter_map(normalize));
                let kept = self.transactions.len() - before;
                debug!(
                    %source,
                    records = records.len(),
                    kept,
                    "Normalized source records"
                );
            }
            Err(error) => {
                warn!(%source, %error, "Source fetch failed, treating it as empty");
                self.failures.push(SourceFailure {
                    source,
                    message: error.to_string(),
                });
            }
        }
    }

    fn finish(self) -> Ledger {
        if self.failures.len() == SourceKind::ALL.len() {
            warn!("Every ledger source failed, the ledger is empty");
        }
        Ledger::new(self.transactions, self.failures)
    }
}

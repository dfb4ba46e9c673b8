//! Test fixtures: in-memory sources, database setup and end-to-end scenarios.

pub mod helpers;
pub mod scenario_society;

use async_trait::async_trait;
use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};
use model::transaction::SourceKind;
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::error::{ComputeError, Result};
use crate::ledger::{Ledger, TransactionFilter};
use crate::sources::LedgerSources;
use migration::{Migrator, MigratorTrait};

pub async fn setup_db() -> std::result::Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

/// Routes log output through the test harness so it only shows for failing tests.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Sources backed by fixed vectors. `None` makes that read fail.
#[derive(Clone, Default)]
pub struct StaticSources {
    pub maintenance: Option<Vec<maintenance_payment::Model>>,
    pub invoices: Option<Vec<vendor_invoice::Model>>,
    pub billing: Option<Vec<vendor_billing_history::Model>>,
    pub deposits: Option<Vec<renovation_deposit::Model>>,
    pub rooms: Option<Vec<society_room_finance::Model>>,
}

impl StaticSources {
    pub fn failing() -> Self {
        Self::default()
    }
}

fn read<T: Clone>(kind: SourceKind, records: &Option<Vec<T>>) -> Result<Vec<T>> {
    records
        .clone()
        .ok_or_else(|| ComputeError::Database(DbErr::Custom(format!("{kind} unavailable"))))
}

#[async_trait]
impl LedgerSources for StaticSources {
    async fn maintenance_payments(&self) -> Result<Vec<maintenance_payment::Model>> {
        read(SourceKind::MaintenancePayments, &self.maintenance)
    }

    async fn vendor_invoices(&self) -> Result<Vec<vendor_invoice::Model>> {
        read(SourceKind::VendorInvoices, &self.invoices)
    }

    async fn vendor_billing_history(&self) -> Result<Vec<vendor_billing_history::Model>> {
        read(SourceKind::VendorBillingHistory, &self.billing)
    }

    async fn renovation_deposits(&self) -> Result<Vec<renovation_deposit::Model>> {
        read(SourceKind::RenovationDeposits, &self.deposits)
    }

    async fn society_room_finances(&self) -> Result<Vec<society_room_finance::Model>> {
        read(SourceKind::SocietyRooms, &self.rooms)
    }
}

/// Expected outcome of a scenario: final totals and the running balance of
/// every passbook row.
pub struct ExpectedLedger {
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub running_balances: Vec<Decimal>,
    pub failed_sources: Vec<SourceKind>,
}

/// Prepared test scenario.
pub type TestScenario = (DatabaseConnection, ExpectedLedger);

/// Trait for building test scenarios.
#[async_trait]
pub trait TestScenarioBuilder {
    async fn get_scenario(&self) -> std::result::Result<TestScenario, DbErr>;
}

pub fn assert_ledger(ledger: &Ledger, expected: &ExpectedLedger) {
    let totals = ledger.totals();
    assert_eq!(totals.total_credits, expected.total_credits);
    assert_eq!(totals.total_debits, expected.total_debits);
    assert_eq!(totals.balance, expected.total_credits - expected.total_debits);

    let balances: Vec<Decimal> = ledger
        .passbook(&TransactionFilter::default())
        .iter()
        .map(|row| row.running_balance)
        .collect();
    assert_eq!(balances, expected.running_balances);

    let failed: Vec<SourceKind> = ledger.failures().iter().map(|f| f.source).collect();
    assert_eq!(failed, expected.failed_sources);
}

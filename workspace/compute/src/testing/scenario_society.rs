use async_trait::async_trait;
use model::transaction::SourceKind;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DbErr};

use super::helpers::*;
use super::{ExpectedLedger, TestScenario, TestScenarioBuilder, setup_db};

/// A month of society activity touching every source, including records
/// that must be filtered out (pending maintenance, draft invoice, room entry
/// without an amount).
pub struct ScenarioSociety {
    /// Drop the invoices table before aggregating so that source fails.
    break_invoices: bool,
}

impl ScenarioSociety {
    pub fn new() -> Self {
        Self {
            break_invoices: false,
        }
    }

    pub fn with_broken_invoices() -> Self {
        Self {
            break_invoices: true,
        }
    }
}

#[async_trait]
impl TestScenarioBuilder for ScenarioSociety {
    async fn get_scenario(&self) -> Result<TestScenario> {
        let db = setup_db().await?;

        new_maintenance_payment(&db, "A-101", 5000, "paid", date(2024, 1, 10)).await?;
        new_maintenance_payment(&db, "A-102", 5000, "pending", date(2024, 1, 11)).await?;

        new_vendor_invoice(&db, "INV-1", 2000, None, "paid", date(2024, 1, 5)).await?;
        new_vendor_invoice(&db, "INV-2", 3000, Some(1200), "partial", date(2024, 1, 20)).await?;
        new_vendor_invoice(&db, "INV-3", 4000, None, "draft", date(2024, 1, 21)).await?;

        new_vendor_payment(&db, "LiftCare", 700, Some("bank_transfer"), date(2024, 1, 25)).await?;

        new_renovation_deposit(&db, "C-303", 1000, "pending", date(2024, 1, 15)).await?;

        // Room entries are dated by creation (2024-01-02)
        new_room_finance(&db, "R-1", Some(1), Some(800)).await?;
        new_room_finance(&db, "R-2", Some(1), None).await?;

        let expected = if self.break_invoices {
            db.execute_unprepared("DROP TABLE vendor_invoices").await?;
            ExpectedLedger {
                total_credits: Decimal::new(6800, 0),
                total_debits: Decimal::new(700, 0),
                running_balances: vec![
                    Decimal::new(800, 0),
                    Decimal::new(5800, 0),
                    Decimal::new(6800, 0),
                    Decimal::new(6100, 0),
                ],
                failed_sources: vec![SourceKind::VendorInvoices],
            }
        } else {
            ExpectedLedger {
                total_credits: Decimal::new(6800, 0),
                total_debits: Decimal::new(3900, 0),
                running_balances: vec![
                    Decimal::new(800, 0),
                    Decimal::new(-1200, 0),
                    Decimal::new(3800, 0),
                    Decimal::new(4800, 0),
                    Decimal::new(3600, 0),
                    Decimal::new(2900, 0),
                ],
                failed_sources: vec![],
            }
        };

        Ok((db, expected))
    }
}

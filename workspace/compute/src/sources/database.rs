use async_trait::async_trait;
use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument, trace};

use super::LedgerSources;
use crate::error::Result;

/// Status a maintenance payment must have to count as income.
pub const MAINTENANCE_PAID: &str = "paid";

/// Invoice statuses that mean money has left the society.
pub const INVOICE_SETTLED: [&str; 2] = ["paid", "partial"];

/// Reads every source from the relational store.
#[derive(Clone, Debug)]
pub struct DatabaseSources {
    db: DatabaseConnection,
}

impl DatabaseSources {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerSources for DatabaseSources {
    async fn maintenance_payments(&self) -> Result<Vec<maintenance_payment::Model>> {
        get_paid_maintenance_payments(&self.db).await
    }

    async fn vendor_invoices(&self) -> Result<Vec<vendor_invoice::Model>> {
        get_settled_vendor_invoices(&self.db).await
    }

    async fn vendor_billing_history(&self) -> Result<Vec<vendor_billing_history::Model>> {
        get_vendor_billing_history(&self.db).await
    }

    async fn renovation_deposits(&self) -> Result<Vec<renovation_deposit::Model>> {
        get_renovation_deposits(&self.db).await
    }

    async fn society_room_finances(&self) -> Result<Vec<society_room_finance::Model>> {
        get_society_room_finances(&self.db).await
    }
}

/// Gets all maintenance payments marked as paid, oldest payment first.
#[instrument(skip(db))]
pub async fn get_paid_maintenance_payments(
    db: &DatabaseConnection,
) -> Result<Vec<maintenance_payment::Model>> {
    trace!("Querying paid maintenance payments");

    let payments = maintenance_payment::Entity::find()
        .filter(maintenance_payment::Column::Status.eq(MAINTENANCE_PAID))
        .order_by_asc(maintenance_payment::Column::PaidDate)
        .order_by_asc(maintenance_payment::Column::Id)
        .all(db)
        .await?;

    debug!("Found {} paid maintenance payments", payments.len());
    Ok(payments)
}

/// Gets all vendor invoices that are paid or partially paid.
#[instrument(skip(db))]
pub async fn get_settled_vendor_invoices(
    db: &DatabaseConnection,
) -> Result<Vec<vendor_invoice::Model>> {
    trace!("Querying settled vendor invoices");

    let invoices = vendor_invoice::Entity::find()
        .filter(vendor_invoice::Column::Status.is_in(INVOICE_SETTLED))
        .order_by_asc(vendor_invoice::Column::InvoiceDate)
        .order_by_asc(vendor_invoice::Column::Id)
        .all(db)
        .await?;

    debug!("Found {} settled vendor invoices", invoices.len());
    Ok(invoices)
}

/// Gets the full vendor billing history.
#[instrument(skip(db))]
pub async fn get_vendor_billing_history(
    db: &DatabaseConnection,
) -> Result<Vec<vendor_billing_history::Model>> {
    trace!("Querying vendor billing history");

    let entries = vendor_billing_history::Entity::find()
        .order_by_asc(vendor_billing_history::Column::PaymentDate)
        .order_by_asc(vendor_billing_history::Column::Id)
        .all(db)
        .await?;

    debug!("Found {} vendor billing entries", entries.len());
    Ok(entries)
}

/// Gets every renovation deposit regardless of status.
#[instrument(skip(db))]
pub async fn get_renovation_deposits(
    db: &DatabaseConnection,
) -> Result<Vec<renovation_deposit::Model>> {
    trace!("Querying renovation deposits");

    let deposits = renovation_deposit::Entity::find()
        .order_by_asc(renovation_deposit::Column::DepositDate)
        .order_by_asc(renovation_deposit::Column::Id)
        .all(db)
        .await?;

    debug!("Found {} renovation deposits", deposits.len());
    Ok(deposits)
}

/// Gets society room finance entries that carry an amount.
#[instrument(skip(db))]
pub async fn get_society_room_finances(
    db: &DatabaseConnection,
) -> Result<Vec<society_room_finance::Model>> {
    trace!("Querying society room finance entries");

    let entries = society_room_finance::Entity::find()
        .filter(society_room_finance::Column::FinanceAmount.is_not_null())
        .order_by_asc(society_room_finance::Column::CreatedAt)
        .order_by_asc(society_room_finance::Column::Id)
        .all(db)
        .await?;

    debug!("Found {} society room finance entries", entries.len());
    Ok(entries)
}

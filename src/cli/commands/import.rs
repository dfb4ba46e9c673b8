use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, NotSet, Set, TransactionTrait};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, trace};

use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};

/// A JSON dump of the five source collections. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceDump {
    #[serde(alias = "maintenancePayments")]
    pub maintenance_payments: Vec<MaintenanceRecord>,
    #[serde(alias = "vendorInvoices")]
    pub vendor_invoices: Vec<InvoiceRecord>,
    #[serde(alias = "vendorBillingHistory")]
    pub vendor_billing_history: Vec<BillingRecord>,
    #[serde(alias = "renovationDeposits")]
    pub renovation_deposits: Vec<DepositRecord>,
    #[serde(alias = "societyRoomFinances", alias = "society_rooms")]
    pub society_room_finances: Vec<RoomRecord>,
}

impl SourceDump {
    pub fn record_count(&self) -> usize {
        self.maintenance_payments.len()
            + self.vendor_invoices.len()
            + self.vendor_billing_history.len()
            + self.renovation_deposits.len()
            + self.society_room_finances.len()
    }
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceRecord {
    id: Option<i32>,
    #[serde(alias = "flatNumber")]
    flat_number: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    amount: Option<Decimal>,
    status: String,
    #[serde(default, alias = "paidDate")]
    paid_date: Option<NaiveDate>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceRecord {
    id: Option<i32>,
    #[serde(alias = "vendorName")]
    vendor_name: String,
    #[serde(alias = "invoiceNumber")]
    invoice_number: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    amount: Option<Decimal>,
    #[serde(default, alias = "paidAmount", deserialize_with = "deserialize_amount")]
    paid_amount: Option<Decimal>,
    status: String,
    #[serde(default, alias = "invoiceDate")]
    invoice_date: Option<NaiveDate>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct BillingRecord {
    id: Option<i32>,
    #[serde(alias = "vendorName")]
    vendor_name: String,
    #[serde(default, alias = "amountPaid", deserialize_with = "deserialize_amount")]
    amount_paid: Option<Decimal>,
    #[serde(default, alias = "paymentMode")]
    payment_mode: Option<String>,
    #[serde(default, alias = "paymentDate")]
    payment_date: Option<NaiveDate>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct DepositRecord {
    id: Option<i32>,
    #[serde(alias = "flatNumber")]
    flat_number: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    amount: Option<Decimal>,
    status: String,
    #[serde(default, alias = "depositDate")]
    deposit_date: Option<NaiveDate>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct RoomRecord {
    id: Option<i32>,
    #[serde(alias = "roomNumber")]
    room_number: String,
    #[serde(default)]
    month: Option<i32>,
    #[serde(default, alias = "financeAmount", deserialize_with = "deserialize_amount")]
    finance_amount: Option<Decimal>,
    status: String,
    #[serde(default, alias = "createdAt")]
    created_at: Option<NaiveDateTime>,
}

/// Largest magnitude the `Decimal(16, 4)` amount columns can hold.
const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

/// Accepts amounts written as JSON numbers or as decimal strings.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value: serde_json::Value = serde::Deserialize::deserialize(deserializer)?;

    let amount = match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid amount {n}: {e}"))),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid amount '{s}': {e}"))),
        _ => Err(D::Error::custom("amount must be a number, a string or null")),
    }?;

    match amount {
        Some(amount) if amount.abs() >= MAX_AMOUNT => Err(D::Error::custom(format!(
            "amount {amount} exceeds the supported range"
        ))),
        _ => Ok(amount),
    }
}

pub fn parse_dump(reader: impl Read) -> Result<SourceDump> {
    serde_json::from_reader(reader).context("Failed to parse JSON")
}

pub async fn import_records(json_path: &str, database_url: &str) -> Result<()> {
    info!("Starting source record import");
    debug!("JSON path: {}", json_path);
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let file = File::open(Path::new(json_path))
        .with_context(|| format!("Failed to open file: {}", json_path))?;
    let dump = parse_dump(file)?;
    info!("Loaded {} records from {}", dump.record_count(), json_path);

    let txn = db.begin().await?;
    import_dump(&txn, dump).await?;
    txn.commit().await?;

    info!("Import completed successfully!");
    Ok(())
}

/// Inserts every record of the dump. Records without `created_at` are stamped
/// with the current time; records without `id` get one from the database.
pub async fn import_dump<C: ConnectionTrait>(db: &C, dump: SourceDump) -> Result<()> {
    let now = Utc::now().naive_utc();

    trace!("Importing maintenance payments");
    for record in dump.maintenance_payments {
        maintenance_payment::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            flat_number: Set(record.flat_number),
            amount: Set(record.amount),
            status: Set(record.status),
            paid_date: Set(record.paid_date),
            created_at: Set(record.created_at.unwrap_or(now)),
        }
        .insert(db)
        .await
        .context("Failed to insert maintenance payment")?;
    }

    trace!("Importing vendor invoices");
    for record in dump.vendor_invoices {
        vendor_invoice::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            vendor_name: Set(record.vendor_name),
            invoice_number: Set(record.invoice_number),
            description: Set(record.description),
            amount: Set(record.amount),
            paid_amount: Set(record.paid_amount),
            status: Set(record.status),
            invoice_date: Set(record.invoice_date),
            created_at: Set(record.created_at.unwrap_or(now)),
        }
        .insert(db)
        .await
        .context("Failed to insert vendor invoice")?;
    }

    trace!("Importing vendor billing history");
    for record in dump.vendor_billing_history {
        vendor_billing_history::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            vendor_name: Set(record.vendor_name),
            amount_paid: Set(record.amount_paid),
            payment_mode: Set(record.payment_mode),
            payment_date: Set(record.payment_date),
            created_at: Set(record.created_at.unwrap_or(now)),
        }
        .insert(db)
        .await
        .context("Failed to insert vendor billing entry")?;
    }

    trace!("Importing renovation deposits");
    for record in dump.renovation_deposits {
        renovation_deposit::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            flat_number: Set(record.flat_number),
            amount: Set(record.amount),
            status: Set(record.status),
            deposit_date: Set(record.deposit_date),
            created_at: Set(record.created_at.unwrap_or(now)),
        }
        .insert(db)
        .await
        .context("Failed to insert renovation deposit")?;
    }

    trace!("Importing society room finances");
    for record in dump.society_room_finances {
        society_room_finance::ActiveModel {
            id: record.id.map_or(NotSet, Set),
            room_number: Set(record.room_number),
            month: Set(record.month),
            finance_amount: Set(record.finance_amount),
            status: Set(record.status),
            created_at: Set(record.created_at.unwrap_or(now)),
        }
        .insert(db)
        .await
        .context("Failed to insert society room finance entry")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::default_aggregator;
    use compute::ledger::TransactionFilter;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{DatabaseConnection, EntityTrait};

    const DUMP: &str = r#"{
        "maintenance_payments": [
            {"id": 1, "flat_number": "A-101", "amount": "5000.00", "status": "paid", "paid_date": "2024-01-10"},
            {"id": 2, "flat_number": "A-102", "amount": 5000, "status": "pending"}
        ],
        "vendorInvoices": [
            {"invoiceNumber": "INV-1", "vendorName": "LiftCare", "amount": 2000, "status": "paid",
             "invoiceDate": "2024-01-05", "createdAt": "2024-01-05T09:30:00"}
        ],
        "renovation_deposits": [
            {"flat_number": "C-303", "amount": "1000", "status": "pending", "deposit_date": "2024-01-15"}
        ]
    }"#;

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[test]
    fn test_parse_dump_accepts_both_key_styles() {
        let dump = parse_dump(DUMP.as_bytes()).unwrap();

        assert_eq!(dump.maintenance_payments.len(), 2);
        assert_eq!(dump.vendor_invoices.len(), 1);
        assert!(dump.vendor_billing_history.is_empty());
        assert_eq!(dump.record_count(), 4);
        assert_eq!(dump.maintenance_payments[0].amount, Some(Decimal::new(500000, 2)));
        assert_eq!(dump.vendor_invoices[0].invoice_number, "INV-1");
    }

    #[test]
    fn test_amount_formats() {
        let dump = parse_dump(
            r#"{"society_room_finances": [
                {"room_number": "R-1", "finance_amount": 800.5, "status": "paid"},
                {"room_number": "R-2", "finance_amount": "", "status": "paid"},
                {"room_number": "R-3", "finance_amount": null, "status": "paid"},
                {"room_number": "R-4", "status": "paid"}
            ]}"#
            .as_bytes(),
        )
        .unwrap();

        let amounts: Vec<_> = dump.society_room_finances.iter().map(|r| r.finance_amount).collect();
        assert_eq!(amounts, vec![Some(Decimal::new(8005, 1)), None, None, None]);
    }

    #[test]
    fn test_rejects_malformed_amount() {
        let parsed = parse_dump(
            r#"{"renovation_deposits": [{"flat_number": "C-1", "amount": "lots", "status": "paid"}]}"#
                .as_bytes(),
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_rejects_out_of_range_amount() {
        let huge = parse_dump(
            r#"{"maintenance_payments": [
                {"flat_number": "A-1", "amount": "50000000000000000000000000000", "status": "paid"}
            ]}"#
            .as_bytes(),
        );
        assert!(huge.is_err());

        let largest = parse_dump(
            r#"{"maintenance_payments": [
                {"flat_number": "A-1", "amount": "999999999999.9999", "status": "paid"}
            ]}"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(
            largest.maintenance_payments[0].amount,
            Some(Decimal::new(9_999_999_999_999_999, 4))
        );
    }

    #[tokio::test]
    async fn test_imported_records_aggregate() {
        let db = setup_db().await;
        import_dump(&db, parse_dump(DUMP.as_bytes()).unwrap()).await.unwrap();

        let invoices = vendor_invoice::Entity::find().all(&db).await.unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].created_at.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        let ledger = default_aggregator(db).aggregate().await;
        assert!(ledger.is_complete());
        let totals = ledger.totals();
        assert_eq!(totals.total_credits, Decimal::new(6000, 0));
        assert_eq!(totals.total_debits, Decimal::new(2000, 0));
        assert_eq!(ledger.passbook(&TransactionFilter::default()).len(), 3);
    }
}

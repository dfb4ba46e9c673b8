use chrono::{NaiveDate, NaiveDateTime};
use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};
use model::transaction::{SourceKind, Transaction};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

pub type Result<T> = std::result::Result<T, DbErr>;

pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Creation timestamp used by every fixture record.
pub fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn amount(value: Option<i64>) -> Option<Decimal> {
    value.map(|v| Decimal::new(v, 0))
}

/// A normalized transaction whose description is `"{category} - {reference}"`.
pub fn transaction(
    source: SourceKind,
    id: i32,
    (year, month, day): (i32, u32, u32),
    value: i64,
    reference: &str,
) -> Transaction {
    let kind = source.transaction_kind();
    Transaction::new(
        source,
        id,
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        Decimal::new(value, 0),
        format!("{} - {}", kind.category(), reference),
        "paid",
        reference,
    )
}

pub fn maintenance(
    id: i32,
    flat: &str,
    value: Option<i64>,
    status: &str,
    paid_date: Option<NaiveDate>,
) -> maintenance_payment::Model {
    maintenance_payment::Model {
        id,
        flat_number: flat.to_string(),
        amount: amount(value),
        status: status.to_string(),
        paid_date,
        created_at: created_at(),
    }
}

pub fn invoice(
    id: i32,
    number: &str,
    description: Option<&str>,
    value: Option<i64>,
    paid: Option<i64>,
    status: &str,
    invoice_date: Option<NaiveDate>,
) -> vendor_invoice::Model {
    vendor_invoice::Model {
        id,
        vendor_name: "CleanCo".to_string(),
        invoice_number: number.to_string(),
        description: description.map(str::to_string),
        amount: amount(value),
        paid_amount: amount(paid),
        status: status.to_string(),
        invoice_date,
        created_at: created_at(),
    }
}

pub fn billing(
    id: i32,
    vendor: &str,
    value: Option<i64>,
    mode: Option<&str>,
    payment_date: Option<NaiveDate>,
) -> vendor_billing_history::Model {
    vendor_billing_history::Model {
        id,
        vendor_name: vendor.to_string(),
        amount_paid: amount(value),
        payment_mode: mode.map(str::to_string),
        payment_date,
        created_at: created_at(),
    }
}

pub fn deposit(
    id: i32,
    flat: &str,
    value: Option<i64>,
    status: &str,
    deposit_date: Option<NaiveDate>,
) -> renovation_deposit::Model {
    renovation_deposit::Model {
        id,
        flat_number: flat.to_string(),
        amount: amount(value),
        status: status.to_string(),
        deposit_date,
        created_at: created_at(),
    }
}

pub fn room(
    id: i32,
    number: &str,
    month: Option<i32>,
    value: Option<i64>,
) -> society_room_finance::Model {
    society_room_finance::Model {
        id,
        room_number: number.to_string(),
        month,
        finance_amount: amount(value),
        status: "paid".to_string(),
        created_at: created_at(),
    }
}

pub async fn new_maintenance_payment(
    db: &DatabaseConnection,
    flat: &str,
    value: i64,
    status: &str,
    paid_date: Option<NaiveDate>,
) -> Result<maintenance_payment::Model> {
    maintenance_payment::ActiveModel {
        flat_number: Set(flat.to_string()),
        amount: Set(Some(Decimal::new(value * 100, 2))),
        status: Set(status.to_string()),
        paid_date: Set(paid_date),
        created_at: Set(created_at()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_vendor_invoice(
    db: &DatabaseConnection,
    number: &str,
    value: i64,
    paid: Option<i64>,
    status: &str,
    invoice_date: Option<NaiveDate>,
) -> Result<vendor_invoice::Model> {
    vendor_invoice::ActiveModel {
        vendor_name: Set("CleanCo".to_string()),
        invoice_number: Set(number.to_string()),
        description: Set(None),
        amount: Set(Some(Decimal::new(value * 100, 2))),
        paid_amount: Set(paid.map(|p| Decimal::new(p * 100, 2))),
        status: Set(status.to_string()),
        invoice_date: Set(invoice_date),
        created_at: Set(created_at()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_vendor_payment(
    db: &DatabaseConnection,
    vendor: &str,
    value: i64,
    mode: Option<&str>,
    payment_date: Option<NaiveDate>,
) -> Result<vendor_billing_history::Model> {
    vendor_billing_history::ActiveModel {
        vendor_name: Set(vendor.to_string()),
        amount_paid: Set(Some(Decimal::new(value * 100, 2))),
        payment_mode: Set(mode.map(str::to_string)),
        payment_date: Set(payment_date),
        created_at: Set(created_at()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_renovation_deposit(
    db: &DatabaseConnection,
    flat: &str,
    value: i64,
    status: &str,
    deposit_date: Option<NaiveDate>,
) -> Result<renovation_deposit::Model> {
    renovation_deposit::ActiveModel {
        flat_number: Set(flat.to_string()),
        amount: Set(Some(Decimal::new(value * 100, 2))),
        status: Set(status.to_string()),
        deposit_date: Set(deposit_date),
        created_at: Set(created_at()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_room_finance(
    db: &DatabaseConnection,
    room_number: &str,
    month: Option<i32>,
    value: Option<i64>,
) -> Result<society_room_finance::Model> {
    society_room_finance::ActiveModel {
        room_number: Set(room_number.to_string()),
        month: Set(month),
        finance_amount: Set(value.map(|v| Decimal::new(v * 100, 2))),
        status: Set("paid".to_string()),
        created_at: Set(created_at()),
        ..Default::default()
    }
    .insert(db)
    .await
}

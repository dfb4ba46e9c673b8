use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A payment made to a vendor, independent of any invoice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_billing_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vendor_name: String,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub amount_paid: Option<Decimal>,
    /// Snake-cased mode identifier, e.g. `bank_transfer` or `cheque`.
    pub payment_mode: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

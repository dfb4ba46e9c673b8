use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// An invoice raised by a vendor against the society.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vendor_name: String,
    pub invoice_number: String,
    pub description: Option<String>,
    /// The invoiced amount.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub amount: Option<Decimal>,
    /// What has actually been paid so far. Partially settled invoices carry
    /// less than `amount` here.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub paid_amount: Option<Decimal>,
    pub status: String,
    pub invoice_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

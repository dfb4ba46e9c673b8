use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A maintenance charge collected from a flat.
/// Only payments with status `paid` reach the ledger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flat_number: String,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub amount: Option<Decimal>,
    /// Free-form status as written by the collection pages (`paid`, `pending`, ...).
    pub status: String,
    /// The day the payment was received. Older rows may not have it.
    pub paid_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

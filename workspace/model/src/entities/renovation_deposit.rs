use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A refundable deposit taken from a flat before renovation work starts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "renovation_deposits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flat_number: String,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub amount: Option<Decimal>,
    /// `pending`, `refunded`, ... Carried to the ledger unchanged.
    pub status: String,
    pub deposit_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

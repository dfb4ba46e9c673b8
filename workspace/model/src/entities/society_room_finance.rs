use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A finance entry recorded against a room owned by the society.
/// Rows without a `finance_amount` are bookkeeping notes and never reach the ledger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "society_room_finances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_number: String,
    /// Calendar month the rent covers, 1 = January.
    pub month: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub finance_amount: Option<Decimal>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

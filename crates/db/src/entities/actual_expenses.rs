//! `SeaORM` Entity for actual_expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "actual_expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub travel_request_id: i64,
    pub fund_id: i64,
    /// Three-letter expense code such as `LDG` or `AIR`.
    pub expense_type: String,
    pub total: Decimal,
    pub date_paid: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::travel_requests::Entity",
        from = "Column::TravelRequestId",
        to = "super::travel_requests::Column::Id"
    )]
    TravelRequests,
    #[sea_orm(
        belongs_to = "super::funds::Entity",
        from = "Column::FundId",
        to = "super::funds::Column::Id"
    )]
    Funds,
}

impl Related<super::travel_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelRequests.def()
    }
}

impl Related<super::funds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

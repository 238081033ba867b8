//! `SeaORM` Entity for fundings table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fundings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub travel_request_id: i64,
    pub fund_id: i64,
    pub amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
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

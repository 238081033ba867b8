//! `SeaORM` Entity for vacations table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "vacations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub travel_request_id: i64,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::travel_requests::Entity",
        from = "Column::TravelRequestId",
        to = "super::travel_requests::Column::Id"
    )]
    TravelRequests,
}

impl Related<super::travel_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

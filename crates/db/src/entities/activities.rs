//! `SeaORM` Entity for activities table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::travel_requests::Entity")]
    TravelRequests,
}

impl Related<super::travel_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for employees table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub uid: String,
    pub unit_id: i64,
    pub active: bool,
    pub supervisor_id: Option<i64>,
    pub employee_type: String,
    pub extra_allocation: Option<Decimal>,
    pub allocation_expire_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::units::Entity",
        from = "Column::UnitId",
        to = "super::units::Column::Id"
    )]
    Units,
    #[sea_orm(has_many = "super::travel_requests::Entity")]
    TravelRequests,
}

impl Related<super::units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Units.def()
    }
}

impl Related<super::travel_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

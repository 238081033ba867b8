//! `SeaORM` Entity for travel_requests table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "travel_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub traveler_id: i64,
    pub activity_id: i64,
    pub departure_date: Date,
    pub return_date: Date,
    pub days_ooo: i32,
    pub administrative: bool,
    pub closed: bool,
    pub canceled: bool,
    pub approved_by_id: Option<i64>,
    pub approved_on: Option<DateTimeWithTimeZone>,
    pub international_approved_on: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::TravelerId",
        to = "super::employees::Column::Id"
    )]
    Traveler,
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id"
    )]
    Activities,
    #[sea_orm(has_many = "super::fundings::Entity")]
    Fundings,
    #[sea_orm(has_many = "super::actual_expenses::Entity")]
    ActualExpenses,
    #[sea_orm(has_many = "super::vacations::Entity")]
    Vacations,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Traveler.def()
    }
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::fundings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fundings.def()
    }
}

impl Related<super::actual_expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActualExpenses.def()
    }
}

impl Related<super::vacations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vacations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for funds table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "funds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account: String,
    pub cost_center: String,
    pub fund: String,
    pub manager_id: i64,
    pub unit_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::ManagerId",
        to = "super::employees::Column::Id"
    )]
    Manager,
    #[sea_orm(has_many = "super::fundings::Entity")]
    Fundings,
    #[sea_orm(has_many = "super::actual_expenses::Entity")]
    ActualExpenses,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
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

impl ActiveModelBehavior for ActiveModel {}

//! 规定实体（数值区间政策）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "regulations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub name: String,
    pub min_value: i32,
    pub max_value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::classes::Entity")]
    Classes,
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classes.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_regulation(self) -> crate::models::regulations::entities::Regulation {
        use crate::models::regulations::entities::{Regulation, RegulationType};

        Regulation {
            id: self.id,
            kind: self
                .kind
                .parse::<RegulationType>()
                .unwrap_or(RegulationType::AgeRange),
            name: self.name,
            min_value: self.min_value,
            max_value: self.max_value,
        }
    }
}

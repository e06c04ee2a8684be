//! 学期实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "semesters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachings::Entity")]
    Teachings,
}

impl Related<super::teachings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_semester(self) -> crate::models::semesters::entities::Semester {
        use crate::models::semesters::entities::Semester;

        Semester {
            id: self.id,
            name: self.name,
            year: self.year,
        }
    }
}

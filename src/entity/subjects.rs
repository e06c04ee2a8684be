//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub grade: String,
    /// 每学期 15 分钟考核次数
    pub number_of_15p: i32,
    /// 每学期 45 分钟考核次数
    pub number_of_45p: i32,
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
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::common::Grade;
        use crate::models::subjects::entities::Subject;

        Subject {
            id: self.id,
            name: self.name,
            grade: self.grade.parse::<Grade>().unwrap_or(Grade::Khoi10),
            number_of_15p: self.number_of_15p,
            number_of_45p: self.number_of_45p,
        }
    }
}

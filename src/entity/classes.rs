//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grade: String,
    pub name: String,
    pub amount: i32,
    pub year: i32,
    /// 班主任，一名教师最多带一个班
    #[sea_orm(unique)]
    pub teacher_id: Option<i64>,
    pub regulation_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    HomeroomTeacher,
    #[sea_orm(
        belongs_to = "super::regulations::Entity",
        from = "Column::RegulationId",
        to = "super::regulations::Column::Id"
    )]
    Regulation,
    #[sea_orm(has_many = "super::students_classes::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::teachings::Entity")]
    Teachings,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HomeroomTeacher.def()
    }
}

impl Related<super::regulations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Regulation.def()
    }
}

impl Related<super::students_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::teachings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::Class;
        use crate::models::common::Grade;

        Class {
            id: self.id,
            grade: self.grade.parse::<Grade>().unwrap_or(Grade::Khoi10),
            name: self.name,
            amount: self.amount,
            year: self.year,
            teacher_id: self.teacher_id,
            regulation_id: self.regulation_id,
        }
    }
}

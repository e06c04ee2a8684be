//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grade: String,
    #[sea_orm(unique)]
    pub profile_id: i64,
    pub regulation_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ProfileId",
        to = "super::profiles::Column::Id"
    )]
    Profile,
    #[sea_orm(
        belongs_to = "super::regulations::Entity",
        from = "Column::RegulationId",
        to = "super::regulations::Column::Id"
    )]
    Regulation,
    #[sea_orm(has_many = "super::students_classes::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
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

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::common::Grade;
        use crate::models::students::entities::Student;

        Student {
            id: self.id,
            grade: self.grade.parse::<Grade>().unwrap_or(Grade::Khoi10),
            profile_id: self.profile_id,
            regulation_id: self.regulation_id,
        }
    }
}

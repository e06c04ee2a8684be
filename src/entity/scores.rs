//! 总评成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub score_final: f64,
    pub student_id: i64,
    pub teaching_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teachings::Entity",
        from = "Column::TeachingId",
        to = "super::teachings::Column::Id"
    )]
    Teaching,
    #[sea_orm(has_many = "super::scores_15p::Entity")]
    Scores15p,
    #[sea_orm(has_many = "super::scores_45p::Entity")]
    Scores45p,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teaching.def()
    }
}

impl Related<super::scores_15p::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores15p.def()
    }
}

impl Related<super::scores_45p::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores45p.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_score(self) -> crate::models::scores::entities::Score {
        use crate::models::scores::entities::Score;

        Score {
            id: self.id,
            score_final: self.score_final,
            student_id: self.student_id,
            teaching_id: self.teaching_id,
        }
    }
}

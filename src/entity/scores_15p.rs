//! 15 分钟考核成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores_15p")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub score: f64,
    pub score_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scores::Entity",
        from = "Column::ScoreId",
        to = "super::scores::Column::Id"
    )]
    Score,
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assessment(self) -> crate::models::scores::entities::AssessmentScore {
        use crate::models::scores::entities::{AssessmentKind, AssessmentScore};

        AssessmentScore {
            id: self.id,
            kind: AssessmentKind::Short15p,
            score: self.score,
            score_id: self.score_id,
        }
    }
}

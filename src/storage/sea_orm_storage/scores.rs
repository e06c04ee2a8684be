use super::SeaOrmStorage;
use crate::entity::{scores, scores_15p, scores_45p};
use crate::errors::{Result, SchoolAdminError};
use crate::models::scores::{
    entities::{AssessmentKind, AssessmentScore, Score},
    requests::CreateScoreRequest,
};
use crate::utils::validate::validate_score;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建总评成绩
    pub async fn create_score_impl(&self, req: CreateScoreRequest) -> Result<Score> {
        validate_score(req.score_final).map_err(SchoolAdminError::validation)?;

        let model = scores::ActiveModel {
            score_final: Set(req.score_final),
            student_id: Set(req.student_id),
            teaching_id: Set(req.teaching_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建总评成绩失败: {e}")))?;

        Ok(result.into_score())
    }

    /// 记录一次 15 分钟考核成绩
    pub async fn record_score_15p_impl(
        &self,
        score_id: i64,
        value: f64,
    ) -> Result<AssessmentScore> {
        validate_score(value).map_err(SchoolAdminError::validation)?;

        let model = scores_15p::ActiveModel {
            score: Set(value),
            score_id: Set(score_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            SchoolAdminError::database_operation(format!(
                "记录 {} 成绩失败: {e}",
                AssessmentKind::Short15p
            ))
        })?;

        Ok(result.into_assessment())
    }

    /// 记录一次 45 分钟考核成绩
    pub async fn record_score_45p_impl(
        &self,
        score_id: i64,
        value: f64,
    ) -> Result<AssessmentScore> {
        validate_score(value).map_err(SchoolAdminError::validation)?;

        let model = scores_45p::ActiveModel {
            score: Set(value),
            score_id: Set(score_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            SchoolAdminError::database_operation(format!(
                "记录 {} 成绩失败: {e}",
                AssessmentKind::Long45p
            ))
        })?;

        Ok(result.into_assessment())
    }
}

use super::SeaOrmStorage;
use crate::entity::subjects::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = ActiveModel {
            name: Set(req.name),
            grade: Set(req.grade.to_string()),
            number_of_15p: Set(req.number_of_15p),
            number_of_45p: Set(req.number_of_45p),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }
}

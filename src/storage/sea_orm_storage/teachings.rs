use super::SeaOrmStorage;
use crate::entity::teachings::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::teachings::{entities::Teaching, requests::CreateTeachingRequest};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建授课记录
    pub async fn create_teaching_impl(&self, req: CreateTeachingRequest) -> Result<Teaching> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            semester_id: Set(req.semester_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建授课记录失败: {e}")))?;

        Ok(result.into_teaching())
    }
}

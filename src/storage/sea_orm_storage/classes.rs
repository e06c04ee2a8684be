use super::SeaOrmStorage;
use crate::entity::classes::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use chrono::Datelike;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let year = req.year.unwrap_or_else(|| chrono::Utc::now().year());

        let model = ActiveModel {
            grade: Set(req.grade.to_string()),
            name: Set(req.name),
            amount: Set(req.amount),
            year: Set(year),
            teacher_id: Set(req.teacher_id),
            regulation_id: Set(req.regulation_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }
}

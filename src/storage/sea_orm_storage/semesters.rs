use super::SeaOrmStorage;
use crate::entity::semesters::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::semesters::{entities::Semester, requests::CreateSemesterRequest};
use chrono::Datelike;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建学期
    pub async fn create_semester_impl(&self, req: CreateSemesterRequest) -> Result<Semester> {
        let year = req.year.unwrap_or_else(|| chrono::Utc::now().year());

        let model = ActiveModel {
            name: Set(req.name),
            year: Set(year),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_semester())
    }
}

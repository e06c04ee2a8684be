use super::SeaOrmStorage;
use crate::entity::profiles::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::profiles::{entities::Profile, requests::CreateProfileRequest};
use crate::utils::validate::{validate_email, validate_phone};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建档案
    ///
    /// 入库前做格式校验，数据库的检查约束仍然兜底。
    pub async fn create_profile_impl(&self, req: CreateProfileRequest) -> Result<Profile> {
        validate_phone(&req.phone).map_err(SchoolAdminError::validation)?;
        validate_email(&req.email).map_err(SchoolAdminError::validation)?;

        let birthday = req
            .birthday
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            birthday: Set(birthday),
            gender: Set(req.gender.to_string()),
            address: Set(req.address),
            phone: Set(req.phone),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建档案失败: {e}")))?;

        Ok(result.into_profile())
    }
}

use super::SeaOrmStorage;
use crate::entity::users::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ActiveModelTrait, Set};

const DEFAULT_AVATAR: &str = "default_avatar.png";

impl SeaOrmStorage {
    /// 创建用户
    ///
    /// `req.password` 必须已由调用方哈希。
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            is_active: Set(true),
            avatar: Set(req.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string())),
            profile_id: Set(req.profile_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }
}

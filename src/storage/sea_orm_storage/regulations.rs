use super::SeaOrmStorage;
use crate::entity::regulations::ActiveModel;
use crate::errors::{Result, SchoolAdminError};
use crate::models::regulations::{entities::Regulation, requests::CreateRegulationRequest};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建规定
    ///
    /// min_value <= max_value 由数据库检查约束保证。
    pub async fn create_regulation_impl(&self, req: CreateRegulationRequest) -> Result<Regulation> {
        let model = ActiveModel {
            kind: Set(req.kind.to_string()),
            name: Set(req.name),
            min_value: Set(req.min_value),
            max_value: Set(req.max_value),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建规定失败: {e}")))?;

        Ok(result.into_regulation())
    }
}

use serde::{Deserialize, Serialize};

use super::entities::Gender;

// 创建档案请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub email: String,
    pub birthday: chrono::NaiveDate,
    #[serde(default = "default_gender")]
    pub gender: Gender,
    pub address: String,
    pub phone: String,
}

fn default_gender() -> Gender {
    Gender::Nam
}

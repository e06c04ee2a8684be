use serde::{Deserialize, Serialize};

use super::entities::UserRole;

// 创建用户请求，password 为明文，入库前由调用方哈希
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub avatar: Option<String>,
    pub profile_id: i64,
}

fn default_role() -> UserRole {
    UserRole::Staff
}

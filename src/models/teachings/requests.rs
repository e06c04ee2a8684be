use serde::{Deserialize, Serialize};

// 创建授课请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeachingRequest {
    pub class_id: i64,
    pub semester_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
}

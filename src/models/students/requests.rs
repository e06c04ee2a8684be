use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 创建学生请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default = "default_grade")]
    pub grade: Grade,
    pub profile_id: i64,
    /// 年龄政策规定
    pub regulation_id: i64,
}

fn default_grade() -> Grade {
    Grade::Khoi10
}

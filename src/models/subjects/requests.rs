use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 创建科目请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(default = "default_grade")]
    pub grade: Grade,
    pub number_of_15p: i32,
    pub number_of_45p: i32,
}

fn default_grade() -> Grade {
    Grade::Khoi10
}

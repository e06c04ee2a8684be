use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 创建班级请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub grade: Grade,
    pub name: String,
    #[serde(default)]
    pub amount: i32,
    /// 学年，缺省为当前年份
    pub year: Option<i32>,
    pub teacher_id: Option<i64>,
    pub regulation_id: i64,
}

use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub grade: Grade,
    pub name: String,
    pub amount: i32,
    pub year: i32,
    /// 班主任（可空，一名教师最多带一个班）
    pub teacher_id: Option<i64>,
    /// 班级人数政策规定
    pub regulation_id: i64,
}

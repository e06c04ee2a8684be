use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub grade: Grade,
    pub number_of_15p: i32,
    pub number_of_45p: i32,
}

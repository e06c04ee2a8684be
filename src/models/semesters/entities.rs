use serde::{Deserialize, Serialize};

// 学期实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub year: i32,
}

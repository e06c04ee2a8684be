use serde::{Deserialize, Serialize};

// 创建学期请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSemesterRequest {
    pub name: String,
    /// 学年，缺省为当前年份
    pub year: Option<i32>,
}

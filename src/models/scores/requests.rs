use serde::{Deserialize, Serialize};

// 创建总评成绩请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScoreRequest {
    pub score_final: f64,
    pub student_id: i64,
    pub teaching_id: i64,
}

use serde::{Deserialize, Serialize};

use crate::models::common::Grade;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub grade: Grade,
    pub profile_id: i64,
    pub regulation_id: i64,
}

// 学生在班记录（students_classes 关联行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
}

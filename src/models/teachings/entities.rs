use serde::{Deserialize, Serialize};

// 授课实体：某班级在某学期由某教师讲授某科目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teaching {
    pub id: i64,
    pub class_id: i64,
    pub semester_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
}

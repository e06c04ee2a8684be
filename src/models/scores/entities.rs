use serde::{Deserialize, Serialize};

// 考核类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Short15p, // 15 分钟考核
    Long45p,  // 45 分钟考核
}

impl std::fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentKind::Short15p => write!(f, "15p"),
            AssessmentKind::Long45p => write!(f, "45p"),
        }
    }
}

// 总评成绩实体，单项考核成绩汇入 score_final
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub score_final: f64,
    pub student_id: i64,
    pub teaching_id: i64,
}

// 单项考核成绩（scores_15p / scores_45p 行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub id: i64,
    pub kind: AssessmentKind,
    pub score: f64,
    pub score_id: i64,
}

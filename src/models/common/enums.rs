use serde::{Deserialize, Serialize};

// 年级（khối），班级、学生、科目共用
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Khoi10, // 十年级
    Khoi11, // 十一年级
    Khoi12, // 十二年级
}

impl Grade {
    pub const KHOI10: &'static str = "khoi10";
    pub const KHOI11: &'static str = "khoi11";
    pub const KHOI12: &'static str = "khoi12";

    /// 对应的年级数字
    pub fn year_level(&self) -> i32 {
        match self {
            Grade::Khoi10 => 10,
            Grade::Khoi11 => 11,
            Grade::Khoi12 => 12,
        }
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Grade::KHOI10 => Ok(Grade::Khoi10),
            Grade::KHOI11 => Ok(Grade::Khoi11),
            Grade::KHOI12 => Ok(Grade::Khoi12),
            _ => Err(serde::de::Error::custom(format!(
                "无效的年级: '{s}'. 支持的年级: khoi10, khoi11, khoi12"
            ))),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Khoi10 => write!(f, "{}", Grade::KHOI10),
            Grade::Khoi11 => write!(f, "{}", Grade::KHOI11),
            Grade::Khoi12 => write!(f, "{}", Grade::KHOI12),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "khoi10" => Ok(Grade::Khoi10),
            "khoi11" => Ok(Grade::Khoi11),
            "khoi12" => Ok(Grade::Khoi12),
            _ => Err(format!("Invalid grade: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_roundtrip() {
        for grade in [Grade::Khoi10, Grade::Khoi11, Grade::Khoi12] {
            assert_eq!(grade.to_string().parse::<Grade>(), Ok(grade));
        }
    }

    #[test]
    fn test_grade_year_level() {
        assert_eq!(Grade::Khoi10.year_level(), 10);
        assert_eq!(Grade::Khoi12.year_level(), 12);
    }

    #[test]
    fn test_invalid_grade() {
        assert!("khoi13".parse::<Grade>().is_err());
    }
}

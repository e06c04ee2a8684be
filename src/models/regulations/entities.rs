use serde::{Deserialize, Serialize};

// 规定类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegulationType {
    AgeRange,  // 入学年龄区间
    ClassSize, // 班级人数上限
}

impl RegulationType {
    pub const AGE_RANGE: &'static str = "age_range";
    pub const CLASS_SIZE: &'static str = "class_size";
}

impl<'de> Deserialize<'de> for RegulationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            RegulationType::AGE_RANGE => Ok(RegulationType::AgeRange),
            RegulationType::CLASS_SIZE => Ok(RegulationType::ClassSize),
            _ => Err(serde::de::Error::custom(format!(
                "无效的规定类型: '{s}'. 支持的类型: age_range, class_size"
            ))),
        }
    }
}

impl std::fmt::Display for RegulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegulationType::AgeRange => write!(f, "{}", RegulationType::AGE_RANGE),
            RegulationType::ClassSize => write!(f, "{}", RegulationType::CLASS_SIZE),
        }
    }
}

impl std::str::FromStr for RegulationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age_range" => Ok(RegulationType::AgeRange),
            "class_size" => Ok(RegulationType::ClassSize),
            _ => Err(format!("Invalid regulation type: {s}")),
        }
    }
}

// 规定实体：命名的数值区间政策
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regulation {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: RegulationType,
    pub name: String,
    pub min_value: i32,
    pub max_value: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_type_roundtrip() {
        for kind in [RegulationType::AgeRange, RegulationType::ClassSize] {
            assert_eq!(kind.to_string().parse::<RegulationType>(), Ok(kind));
        }
    }

    #[test]
    fn test_invalid_regulation_type() {
        assert!("dress_code".parse::<RegulationType>().is_err());
    }
}

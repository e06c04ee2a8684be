use serde::{Deserialize, Serialize};

// 性别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Nam, // 男
    Nu,  // 女
}

impl Gender {
    pub const NAM: &'static str = "nam";
    pub const NU: &'static str = "nu";
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Gender::NAM => Ok(Gender::Nam),
            Gender::NU => Ok(Gender::Nu),
            _ => Err(serde::de::Error::custom(format!(
                "无效的性别: '{s}'. 支持的性别: nam, nu"
            ))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Nam => write!(f, "{}", Gender::NAM),
            Gender::Nu => write!(f, "{}", Gender::NU),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nam" => Ok(Gender::Nam),
            "nu" => Ok(Gender::Nu),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

// 个人档案实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birthday: chrono::NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub phone: String,
}

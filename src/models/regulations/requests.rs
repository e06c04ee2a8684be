use serde::{Deserialize, Serialize};

use super::entities::RegulationType;

// 创建规定请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegulationRequest {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: RegulationType,
    pub name: String,
    pub min_value: i32,
    pub max_value: i32,
}

fn default_kind() -> RegulationType {
    RegulationType::AgeRange
}

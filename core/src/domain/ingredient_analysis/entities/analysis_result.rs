use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::breakdown_item::BreakdownItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// 0..=100, higher is healthier.
    pub health_score: u8,
    pub summary: String,
    pub breakdown: Vec<BreakdownItem>,
    pub flags: Vec<String>,
    pub health_advice: Vec<String>,
}

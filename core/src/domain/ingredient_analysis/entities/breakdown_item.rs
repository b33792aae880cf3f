use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Healthfulness tag of a single ingredient.
///
/// The tag alone does not order ingredients by severity; `BreakdownItem::severity`
/// carries the weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Classification {
    Healthy,
    #[serde(rename = "Moderately Harmful")]
    ModeratelyHarmful,
    Harmful,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Healthy => "Healthy",
            Classification::ModeratelyHarmful => "Moderately Harmful",
            Classification::Harmful => "Harmful",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Classification::Healthy)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Ok(Classification::Healthy),
            "moderately harmful" | "moderately_harmful" => Ok(Classification::ModeratelyHarmful),
            "harmful" => Ok(Classification::Harmful),
            other => Err(CoreError::MalformedResponse(format!(
                "unknown classification '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreakdownItem {
    pub ingredient: String,
    pub classification: Classification,
    /// 0..=5, each point costs 6 score points.
    pub severity: u8,
    pub reason: String,
}

impl BreakdownItem {
    pub fn new(
        ingredient: impl Into<String>,
        classification: Classification,
        severity: u8,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            classification,
            severity,
            reason: reason.into(),
        }
    }
}

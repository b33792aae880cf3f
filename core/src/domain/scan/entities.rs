use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::AllergenInfo,
    common::generate_timestamp,
    diet::DietCompatibility,
    ingredient_analysis::{
        entities::AnalysisResult, helpers::tokenize_ingredients, scoring::score_hue,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    Image,
    Text,
}

/// Everything one analysis invocation produced. Not persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub id: Uuid,
    pub source: ScanSource,
    pub raw_text: String,
    pub cleaned_ingredients: Vec<String>,
    pub analysis: AnalysisResult,
    /// Red (0) to green (120) hue for rendering `analysis.health_score`.
    pub health_hue: u16,
    pub allergens: Vec<AllergenInfo>,
    pub diets: Vec<DietCompatibility>,
    pub analyzed_at: DateTime<Utc>,
}

impl ScanReport {
    /// Builds a report from side analyses that were already computed.
    pub fn assemble(
        source: ScanSource,
        raw_text: String,
        analysis: AnalysisResult,
        allergens: Vec<AllergenInfo>,
        diets: Vec<DietCompatibility>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            source,
            cleaned_ingredients: tokenize_ingredients(&raw_text),
            raw_text,
            health_hue: score_hue(analysis.health_score),
            analysis,
            allergens,
            diets,
            analyzed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen::detect_allergens, diet::check_diet_compatibility,
        ingredient_analysis::helpers::analyze_with_rules,
    };

    #[test]
    fn test_assemble_bundles_side_analyses() {
        let text = "Wheat flour, sugar, E102, milk".to_string();
        let report = ScanReport::assemble(
            ScanSource::Text,
            text.clone(),
            analyze_with_rules(&text),
            detect_allergens(&text),
            check_diet_compatibility(&text),
        );

        assert_eq!(
            report.cleaned_ingredients,
            vec!["Wheat flour", "sugar", "E102", "milk"]
        );
        let allergen_names: Vec<_> = report.allergens.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(allergen_names, vec!["Gluten", "Dairy"]);
        assert_eq!(report.diets.len(), 10);
        assert_eq!(report.analysis.flags, vec!["sugar", "E102"]);
        assert_eq!(report.id.get_version_num(), 7);
        assert_eq!(
            report.health_hue,
            score_hue(report.analysis.health_score)
        );
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ScanSource::Image).unwrap(), "\"image\"");
    }
}

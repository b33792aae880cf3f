use crate::domain::diet::entities::{DIETS, DietCompatibility, DietRule};

const BASE_CONFIDENCE: i32 = 50;
const RESTRICTION_PENALTY: i32 = 20;
const KEYWORD_BONUS: i32 = 10;

/// One verdict per diet in dictionary order, always `DIETS.len()` entries.
pub fn check_diet_compatibility(text: &str) -> Vec<DietCompatibility> {
    let haystack = text.to_lowercase();
    DIETS.iter().map(|diet| evaluate(diet, &haystack)).collect()
}

// Compatibility only looks at restrictions while confidence also rewards
// keywords, so a violated diet can still report high confidence.
fn evaluate(diet: &DietRule, haystack: &str) -> DietCompatibility {
    let restrictions: Vec<String> = diet
        .restrictions
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .map(|term| term.to_string())
        .collect();

    let reasons: Vec<String> = diet
        .keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .map(|keyword| format!("Contains {} ingredients", keyword))
        .collect();

    let confidence = BASE_CONFIDENCE - restrictions.len() as i32 * RESTRICTION_PENALTY
        + reasons.len() as i32 * KEYWORD_BONUS;

    DietCompatibility {
        diet: diet.name.to_string(),
        is_compatible: restrictions.is_empty(),
        confidence: confidence.clamp(0, 100) as u8,
        reasons,
        restrictions,
    }
}

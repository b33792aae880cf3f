use crate::domain::ingredient_analysis::entities::BreakdownItem;

const BASE_SCORE: i64 = 100;
const PENALTY_PER_SEVERITY_POINT: i64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub health_score: u8,
    pub summary: String,
}

/// Linear penalty model: every severity point costs 6, clamped to 0..=100.
pub fn compute_health_score(breakdown: &[BreakdownItem]) -> u8 {
    let penalty: i64 = breakdown
        .iter()
        .map(|item| i64::from(item.severity) * PENALTY_PER_SEVERITY_POINT)
        .sum();

    (BASE_SCORE - penalty).clamp(0, 100) as u8
}

/// Ingredients whose classification is not `Healthy`, in breakdown order.
pub fn derive_flags(breakdown: &[BreakdownItem]) -> Vec<String> {
    breakdown
        .iter()
        .filter(|item| !item.classification.is_healthy())
        .map(|item| item.ingredient.clone())
        .collect()
}

pub fn summarize(flags: &[String]) -> String {
    if flags.is_empty() {
        "No concerning additives detected.".to_string()
    } else {
        format!(
            "Contains {}; review before frequent consumption.",
            flags.join(", ")
        )
    }
}

pub fn aggregate(breakdown: &[BreakdownItem]) -> ScoreSummary {
    ScoreSummary {
        health_score: compute_health_score(breakdown),
        summary: summarize(&derive_flags(breakdown)),
    }
}

/// Maps a score onto a red (0) to green (120) hue.
pub fn score_hue(score: u8) -> u16 {
    let clamped = f64::from(score.min(100));
    ((clamped / 100.0) * 120.0).round() as u16
}

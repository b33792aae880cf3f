use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{
        advice::generate_advice,
        entities::AnalysisResult,
        rules::classify,
        scoring::{compute_health_score, derive_flags, summarize},
    },
};

/// Splits label text on commas, trims each token and drops empty ones.
pub fn tokenize_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenizes `text`, rejecting input that holds no ingredient at all.
pub fn require_ingredients(text: &str) -> Result<Vec<String>, CoreError> {
    let ingredients = tokenize_ingredients(text);
    if ingredients.is_empty() {
        return Err(CoreError::Invalid("Missing text".to_string()));
    }
    Ok(ingredients)
}

/// Complete offline assessment: rule engine, aggregator and advice generator.
pub fn analyze_with_rules(text: &str) -> AnalysisResult {
    let ingredients = tokenize_ingredients(text);
    let breakdown = classify(&ingredients);
    let health_score = compute_health_score(&breakdown);
    let flags = derive_flags(&breakdown);
    let summary = summarize(&flags);
    let health_advice = generate_advice(&breakdown, health_score);

    AnalysisResult {
        health_score,
        summary,
        breakdown,
        flags,
        health_advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_empty_and_trims() {
        assert_eq!(
            tokenize_ingredients(" Water, ,Sugar ,,  E102 "),
            vec!["Water", "Sugar", "E102"]
        );
        assert!(tokenize_ingredients("").is_empty());
        assert!(tokenize_ingredients(" , , ").is_empty());
    }

    #[test]
    fn test_analyze_with_rules_reference_label() {
        let result = analyze_with_rules("E102, Sugar, Organic, Unknown Thing");

        assert_eq!(result.health_score, 64);
        assert_eq!(result.flags, vec!["E102", "Sugar"]);
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.health_advice.len(), 3);
    }

    #[test]
    fn test_require_ingredients_rejects_separators_only() {
        assert_eq!(
            require_ingredients(" , ,"),
            Err(CoreError::Invalid("Missing text".to_string()))
        );
        assert_eq!(require_ingredients("salt").unwrap(), vec!["salt"]);
    }

    #[test]
    fn test_analyze_with_rules_empty_text() {
        let result = analyze_with_rules("");
        assert_eq!(result.health_score, 100);
        assert!(result.breakdown.is_empty());
        assert!(result.flags.is_empty());
        assert_eq!(result.summary, "No concerning additives detected.");
    }
}

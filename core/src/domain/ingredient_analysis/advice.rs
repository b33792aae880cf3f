use crate::domain::ingredient_analysis::entities::{BreakdownItem, Classification};

/// Tiered recommendations for a scored breakdown.
///
/// Tier messages come first, then the harmful-additive warning, then the
/// processed-ingredient warning.
pub fn generate_advice(breakdown: &[BreakdownItem], score: u8) -> Vec<String> {
    let harmful_count = count(breakdown, Classification::Harmful);
    let moderate_count = count(breakdown, Classification::ModeratelyHarmful);

    let mut advice: Vec<&str> = Vec::new();

    match score {
        80.. => advice.push(
            "This product appears to be a healthy choice. Continue enjoying it as part of a balanced diet.",
        ),
        60..80 => {
            advice.push(
                "This product is generally acceptable. Consider it as an occasional treat rather than a daily staple.",
            );
            if moderate_count > 0 {
                advice.push("Look for alternatives with fewer processed ingredients.");
            }
        }
        40..60 => {
            advice.push(
                "This product has some concerning ingredients. Look for alternatives with fewer additives.",
            );
            if harmful_count > 0 {
                advice.push("Consider products without artificial additives and preservatives.");
            }
        }
        _ => {
            advice.push(
                "This product contains multiple concerning ingredients. Consider healthier alternatives.",
            );
            advice.push("Limit consumption and look for products with simpler ingredient lists.");
        }
    }

    if harmful_count > 0 {
        advice.push("Avoid products with artificial colors, flavors, and preservatives when possible.");
    }

    if moderate_count > 2 {
        advice.push("High levels of processed ingredients detected. Choose whole food alternatives.");
    }

    advice.into_iter().map(String::from).collect()
}

fn count(breakdown: &[BreakdownItem], classification: Classification) -> usize {
    breakdown
        .iter()
        .filter(|item| item.classification == classification)
        .count()
}

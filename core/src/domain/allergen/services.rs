use crate::domain::allergen::entities::{ALLERGENS, AllergenInfo};

/// Scans the whole raw text (not tokens) for any common name of each allergen.
///
/// Each allergen appears at most once, in dictionary order.
pub fn detect_allergens(text: &str) -> Vec<AllergenInfo> {
    let haystack = text.to_lowercase();

    ALLERGENS
        .iter()
        .filter(|entry| {
            entry
                .common_names
                .iter()
                .any(|name| haystack.contains(&name.to_lowercase()))
        })
        .map(AllergenInfo::from)
        .collect()
}

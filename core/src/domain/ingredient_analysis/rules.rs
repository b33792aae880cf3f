//! Offline, dictionary-driven ingredient classifier.
//!
//! Lookups are exact matches on the trimmed, lowercased token. Only the
//! generic E-number check is a pattern match.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingredient_analysis::entities::{BreakdownItem, Classification};

const KNOWN_HARMFUL_E_NUMBERS: &[&str] = &[
    "e102", "e110", "e122", "e124", "e129", "e133", "e150", "e151", "e154", "e155", "e180",
];

/// Moderate-risk terms and their canned explanation.
const MODERATE_TERMS: &[(&str, &str)] = &[
    ("sugar", "Added sugar content"),
    ("palm oil", "High in saturated fat"),
    ("salt", "High sodium content"),
    ("glucose syrup", "High glycemic index"),
    ("fructose", "Added fructose"),
    ("corn syrup", "Processed sweetener"),
    ("high fructose corn syrup", "Highly processed sweetener"),
    ("partially hydrogenated", "Contains trans fats"),
    ("trans fat", MODERATE_FALLBACK_REASON),
];

const BENEFICIAL_TERMS: &[&str] = &[
    "whole grain",
    "organic",
    "natural",
    "vitamin",
    "mineral",
    "fiber",
    "protein",
    "omega-3",
    "antioxidant",
];

const KNOWN_HARMFUL_REASON: &str = "Artificial additive with potential adverse health effects";
const E_NUMBER_REASON: &str = "E-number additive; potential health risks";
const MODERATE_FALLBACK_REASON: &str = "Consume in moderation";
const BENEFICIAL_REASON: &str = "Beneficial nutritional component";
const DEFAULT_REASON: &str = "Common food ingredient";

static E_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^e[0-9]{3}$").expect("E-number pattern is valid"));

/// Classifies every token, one `BreakdownItem` per input in input order.
///
/// Empty tokens are classified like any other unknown ingredient; callers
/// filter them out beforehand (see `tokenize_ingredients`).
pub fn classify<S: AsRef<str>>(ingredients: &[S]) -> Vec<BreakdownItem> {
    ingredients
        .iter()
        .map(|ingredient| classify_one(ingredient.as_ref()))
        .collect()
}

pub fn classify_one(ingredient: &str) -> BreakdownItem {
    let display = ingredient.trim();
    let key = display.to_lowercase();

    if KNOWN_HARMFUL_E_NUMBERS.contains(&key.as_str()) {
        return BreakdownItem::new(display, Classification::Harmful, 4, KNOWN_HARMFUL_REASON);
    }

    if E_NUMBER_PATTERN.is_match(display) {
        return BreakdownItem::new(display, Classification::Harmful, 3, E_NUMBER_REASON);
    }

    if let Some((_, reason)) = MODERATE_TERMS.iter().find(|(term, _)| *term == key) {
        return BreakdownItem::new(display, Classification::ModeratelyHarmful, 2, *reason);
    }

    if BENEFICIAL_TERMS.contains(&key.as_str()) {
        return BreakdownItem::new(display, Classification::Healthy, 0, BENEFICIAL_REASON);
    }

    BreakdownItem::new(display, Classification::Healthy, 0, DEFAULT_REASON)
}

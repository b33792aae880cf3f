pub mod analyze_rules;
pub mod analyze_text;
pub mod check_diets;
pub mod detect_allergens;
pub mod scan_image;
pub mod scan_text;

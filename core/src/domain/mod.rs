pub mod allergen;
pub mod chat;
pub mod common;
pub mod diet;
pub mod ingredient_analysis;
pub mod scan;
pub mod text_extraction;

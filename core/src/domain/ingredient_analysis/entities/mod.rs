pub mod analysis_result;
pub mod breakdown_item;

pub use analysis_result::*;
pub use breakdown_item::*;

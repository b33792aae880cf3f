pub mod entities;
pub mod services;

pub use entities::*;
pub use services::check_diet_compatibility;

pub mod advice;
pub mod entities;
pub mod helpers;
pub mod parsing;
pub mod ports;
pub mod prompts;
pub mod rules;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

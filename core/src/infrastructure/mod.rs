pub mod llm;
pub mod proxy;

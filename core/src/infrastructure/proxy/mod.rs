pub mod analysis_proxy;

pub use analysis_proxy::HttpAnalysisProxy;

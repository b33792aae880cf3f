use std::sync::Arc;

use labelscan_core::application::LabelscanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LabelscanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LabelscanService) -> Self {
        Self { args, service }
    }
}

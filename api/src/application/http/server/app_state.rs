use std::sync::Arc;

use spatrem_core::application::SpatremService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SpatremService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SpatremService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use lunchbox_core::application::LunchboxService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LunchboxService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LunchboxService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use piatto_core::application::PiattoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PiattoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PiattoService) -> Self {
        Self { args, service }
    }
}

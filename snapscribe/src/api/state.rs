use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::Pipeline;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let pipeline = Pipeline::new(&config.ocr)?;

        Ok(Self {
            config: Arc::new(config),
            pipeline,
        })
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm::Gateway;
use crate::services::CodeAssistant;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assistant: CodeAssistant,
}

impl AppState {
    pub fn new(config: Config, gateway: Gateway) -> Self {
        Self {
            config: Arc::new(config),
            assistant: CodeAssistant::new(Arc::new(gateway)),
        }
    }
}

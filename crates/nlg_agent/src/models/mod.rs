use std::sync::Arc;

use nlg_core::{ChatModel, Error, Result};

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Per-call model configuration, passed by value. No environment mutation,
/// no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

/// Builds a chat model by backend name. Unknown names are an error, not a
/// silent default.
pub fn create_model(name: &str, config: ModelConfig) -> Result<Arc<dyn ChatModel>> {
    match name {
        "openai" => {
            let api_key = config
                .api_key
                .ok_or_else(|| Error::Model("OpenAI API key is required".to_string()))?;
            let mut model = OpenAiModel::new(api_key);
            if let Some(model_name) = config.model_name {
                model = model.with_model(model_name);
            }
            if let Some(base_url) = config.base_url {
                model = model.with_base_url(base_url);
            }
            Ok(Arc::new(model))
        }
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Model(format!("Unknown model backend: {}", other))),
    }
}

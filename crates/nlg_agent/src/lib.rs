pub mod content;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod topics;
pub mod workflow;

pub use content::generate_content;
pub use models::{create_model, ModelConfig};
pub use pipeline::generate_newsletter;
pub use topics::select_topics;
pub use workflow::{run, Task, TaskKind, TaskOutput};

/// Sampling temperature used by both workflow stages.
pub(crate) const SAMPLING_TEMPERATURE: f32 = 0.7;

pub mod prelude {
    pub use super::models::{create_model, ModelConfig};
    pub use super::pipeline::generate_newsletter;
    pub use super::workflow::{run, Task, TaskKind, TaskOutput};
    pub use nlg_core::{Article, ChatModel, Error, Newsletter, Result};
}

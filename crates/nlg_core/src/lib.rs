pub mod error;
pub mod models;
pub mod render;
pub mod types;

pub use error::Error;
pub use models::{ChatMessage, ChatModel, Role};
pub use types::{Article, Newsletter, NewsletterSection, Reference, SectionContent, TopicSelection};

pub type Result<T> = std::result::Result<T, Error>;

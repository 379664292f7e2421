use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Unknown task kind: {0}")]
    Routing(String),

    #[error("No articles supplied")]
    NoArticles,

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

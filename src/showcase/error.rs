use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

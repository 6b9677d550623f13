use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquamapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown testing kit: {0}")]
    KitNotFound(String),
}

pub type Result<T> = std::result::Result<T, AquamapError>;

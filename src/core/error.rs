use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Unknown personality preset: {0}")]
    UnknownPersonality(String),

    #[error("Invalid personality '{name}': {reason}")]
    InvalidPersonality { name: String, reason: String },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Invalid word list at line {line}: {reason}")]
    InvalidWordList { line: usize, reason: String },

    #[error("Glyphling not found: {0:?}")]
    GlyphlingNotFound(crate::core::types::GlyphlingId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AiError>;

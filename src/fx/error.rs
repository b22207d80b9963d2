use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to parse effects config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, FxError>;

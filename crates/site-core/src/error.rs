use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("malformed content index: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("no article id in location")]
    MissingArticleId,
}

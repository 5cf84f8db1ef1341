use rig::completion::PromptError;
use teloxide::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid posting time '{0}', expected HH:MM")]
    Slot(String),
    #[error("unknown post type '{0}'")]
    PostType(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("POSTING_HOURS: {0}")]
    InvalidSlot(#[from] ParseError),
    #[error("{key} must be a whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Prompt(#[from] PromptError),
    #[error("completion came back empty")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("telegram rejected the message: {0}")]
    Telegram(#[from] RequestError),
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("bot connection failed: {0}")]
    Identity(#[source] RequestError),
    #[error("cannot access channel {channel}: {source}")]
    ChannelAccess {
        channel: String,
        #[source]
        source: RequestError,
    },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("startup aborted, connection test failed: {0}")]
    Verify(#[from] VerifyError),
}

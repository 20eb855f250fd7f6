use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested library does not exist: {id}")]
    NotFound { id: String },
    #[error("Couldn't uniquely identify the repo associated with {target} ({count} candidates)")]
    AmbiguousResolution { target: String, count: usize },
    #[error("Couldn't identify any repo associated with {target}")]
    Unresolved { target: String },
    #[error("Invalid server state: {message}")]
    InvalidServerState { message: String },
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("Server responded with status {status}: {message}")]
    Response { status: u16, message: String },
    #[error("Failed to send request")]
    Request {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SampleError>;

/// Every failure is fatal: the run stops at the first one.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Bad or inconsistent options, reported before any output is created.
    #[error("{0}")]
    Config(String),

    #[error("failed to read {path:?}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The stream opened but a record could not be decoded.
    #[error("malformed record in {path:?}: {msg}")]
    InputFormat { path: String, msg: String },

    #[error("failed to write {path:?}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SampleError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SampleError::Config(msg.into())
    }

    pub fn input(path: &str, source: io::Error) -> Self {
        SampleError::Input {
            path: path.to_owned(),
            source,
        }
    }

    pub fn output(path: &str, source: io::Error) -> Self {
        SampleError::Output {
            path: path.to_owned(),
            source,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, SampleError::Config(_))
    }
}

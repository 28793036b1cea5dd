//! Error types surfaced at the edges of the story feed.
//!
//! The feed controller itself never fails: missing mounts and stale renders
//! degrade to logged no-ops. Errors only arise where the crate touches the
//! outside world (loading the dataset, reading configuration, writing the
//! generated site, running the terminal preview).

use thiserror::Error;

/// Errors surfaced while loading stories, configuring, or writing output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// No dataset path was configured.
    #[error("stories file is required (use --stories or -s)")]
    MissingStoriesPath,

    /// The configured page size was zero.
    #[error("page size must be a positive integer")]
    InvalidPageSize,

    /// The dataset file could not be parsed.
    #[error("stories file is invalid: {message}")]
    InvalidStories {
        /// Parser detail, including the location of the failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// An HTML template failed to compile or render.
    #[error("template error: {message}")]
    Template {
        /// Details from the template engine.
        message: String,
    },

    /// The terminal preview failed to start or crashed.
    #[error("preview error: {message}")]
    Preview {
        /// Details from the terminal runtime.
        message: String,
    },
}

impl From<minijinja::Error> for FeedError {
    fn from(error: minijinja::Error) -> Self {
        Self::Template {
            message: error.to_string(),
        }
    }
}

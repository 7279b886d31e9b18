//! Error types for dispatcher construction.

/// Errors that can occur when building the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A configured sink URL could not be parsed.
    #[error("invalid sink url {url}: {message}")]
    InvalidSinkUrl {
        /// The rejected URL.
        url: String,
        /// Parser diagnostic.
        message: String,
    },

    /// No sinks were configured at all.
    #[error("no sinks configured")]
    NoSinks,
}

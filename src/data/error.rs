use thiserror::Error;

/// Errors surfaced by an item fetch.
///
/// `Display` is the bare message: the view layer shows it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The remote side reported a failure.
    #[error("{message}")]
    Remote { message: String },
}

impl FetchError {
    pub fn remote(message: impl Into<String>) -> Self {
        FetchError::Remote {
            message: message.into(),
        }
    }
}

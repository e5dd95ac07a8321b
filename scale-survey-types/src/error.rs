/// Error type for the fallible survey surfaces.
///
/// Navigation itself never fails; errors arise only when loading a
/// declaration or notifying the host.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The declarative survey input could not be parsed.
    #[error("invalid survey declaration: {0}")]
    Declaration(#[from] serde_json::Error),

    /// Host-specific failure while delivering a notification.
    #[error("host error: {0}")]
    Host(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a host error from any error type.
    pub fn host(err: impl Into<anyhow::Error>) -> Self {
        Self::Host(err.into())
    }
}

use thiserror::Error;

/// Errors generated by the platform authenticator.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the consent prompt message is empty.
    #[error("consent prompt message must not be empty")]
    EmptyMessage,

    /// Error generated when the Windows Runtime could not be
    /// initialized for the calling thread.
    #[cfg(target_os = "windows")]
    #[error("failed to initialize the windows runtime: {0}")]
    RuntimeInit(windows::core::Error),

    /// Error generated by a platform API call.
    #[cfg(target_os = "windows")]
    #[error(transparent)]
    Platform(#[from] windows::core::Error),
}

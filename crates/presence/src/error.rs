use thiserror::Error;

/// Errors generated by the executable.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors generated by the platform authenticator.
    #[error(transparent)]
    Authenticator(#[from] presence_platform_authenticator::Error),
}

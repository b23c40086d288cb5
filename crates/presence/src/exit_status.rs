use presence_platform_authenticator::Outcome;
use std::process::ExitCode;

/// Exit status for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// User presence was verified.
    Verified = 0,
    /// Verification was available but did not succeed.
    NotVerified = 1,
    /// Verification is not available on this device.
    Unavailable = 2,
    /// The runtime, a platform call or the
    /// configuration failed.
    Fatal = 3,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl From<Outcome> for ExitStatus {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Verified => Self::Verified,
            Outcome::NotVerified(_) => Self::NotVerified,
            Outcome::Unavailable(_) => Self::Unavailable,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(value: ExitStatus) -> Self {
        ExitCode::from(value.code())
    }
}

use crate::{Availability, Error, Result, VerificationResult};

/// Operations exposed by the platform consent verifier.
///
/// Platform APIs are asynchronous; implementations block the
/// calling thread until the platform answers.
pub trait UserConsentVerifier {
    /// Check whether a verifier device is available.
    fn check_availability(&self) -> Result<Availability>;

    /// Show the consent prompt with the given message and wait
    /// for the user to complete, cancel or fail the interaction.
    ///
    /// Any retry policy belongs to the platform prompt.
    fn request_verification(
        &self,
        message: &str,
    ) -> Result<VerificationResult>;
}

/// Outcome of a user presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// User presence was verified.
    Verified,
    /// Verification was requested but did not succeed.
    NotVerified(VerificationResult),
    /// Verification is not available so the prompt
    /// was never shown.
    Unavailable(Availability),
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// Every reason for an unsuccessful verification (declined,
    /// canceled, busy, retries exhausted) collapses to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Verified => 0,
            Self::NotVerified(_) => 1,
            Self::Unavailable(_) => 2,
        }
    }
}

impl From<VerificationResult> for Outcome {
    fn from(value: VerificationResult) -> Self {
        if value.is_verified() {
            Self::Verified
        } else {
            Self::NotVerified(value)
        }
    }
}

/// Check availability and, only when a verifier is available,
/// prompt the user once.
pub fn verify<V>(verifier: &V, message: &str) -> Result<Outcome>
where
    V: UserConsentVerifier + ?Sized,
{
    if message.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }

    let availability = verifier.check_availability()?;
    tracing::debug!(?availability, "consent_verifier::availability");
    if !availability.is_available() {
        return Ok(Outcome::Unavailable(availability));
    }

    let result = verifier.request_verification(message)?;
    tracing::debug!(?result, "consent_verifier::verification");
    Ok(result.into())
}

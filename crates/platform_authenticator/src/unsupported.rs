// User consent verification is only implemented for Windows,
// other targets report that no verifier device is present.
use crate::{Availability, Result, UserConsentVerifier, VerificationResult};

/// Consent verifier for targets without a platform backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformVerifier;

impl UserConsentVerifier for PlatformVerifier {
    fn check_availability(&self) -> Result<Availability> {
        tracing::debug!(
            os = std::env::consts::OS,
            "consent_verifier::unsupported"
        );
        Ok(Availability::DeviceNotPresent)
    }

    fn request_verification(
        &self,
        _message: &str,
    ) -> Result<VerificationResult> {
        Ok(VerificationResult::DeviceNotPresent)
    }
}

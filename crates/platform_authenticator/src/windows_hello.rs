//! Windows Hello backend using the
//! `Windows.Security.Credentials.UI.UserConsentVerifier` class.
use crate::{Availability, Result, UserConsentVerifier, VerificationResult};
use windows::{
    core::HSTRING,
    Security::Credentials::UI::{
        UserConsentVerificationResult,
        UserConsentVerifier as ConsentVerifier,
        UserConsentVerifierAvailability,
    },
};

/// Consent verifier backed by Windows Hello.
///
/// Requires an initialized [RuntimeContext](crate::RuntimeContext)
/// on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformVerifier;

impl UserConsentVerifier for PlatformVerifier {
    fn check_availability(&self) -> Result<Availability> {
        let availability = ConsentVerifier::CheckAvailabilityAsync()?.get()?;
        Ok(availability.into())
    }

    fn request_verification(
        &self,
        message: &str,
    ) -> Result<VerificationResult> {
        let message = HSTRING::from(message);
        let result =
            ConsentVerifier::RequestVerificationAsync(&message)?.get()?;
        Ok(result.into())
    }
}

impl From<UserConsentVerifierAvailability> for Availability {
    fn from(value: UserConsentVerifierAvailability) -> Self {
        match value {
            UserConsentVerifierAvailability::Available => Self::Available,
            UserConsentVerifierAvailability::DeviceNotPresent => {
                Self::DeviceNotPresent
            }
            UserConsentVerifierAvailability::NotConfiguredForUser => {
                Self::NotConfiguredForUser
            }
            UserConsentVerifierAvailability::DisabledByPolicy => {
                Self::DisabledByPolicy
            }
            UserConsentVerifierAvailability::DeviceBusy => Self::DeviceBusy,
            other => Self::Unrecognized(other.0),
        }
    }
}

impl From<UserConsentVerificationResult> for VerificationResult {
    fn from(value: UserConsentVerificationResult) -> Self {
        match value {
            UserConsentVerificationResult::Verified => Self::Verified,
            UserConsentVerificationResult::DeviceNotPresent => {
                Self::DeviceNotPresent
            }
            UserConsentVerificationResult::NotConfiguredForUser => {
                Self::NotConfiguredForUser
            }
            UserConsentVerificationResult::DisabledByPolicy => {
                Self::DisabledByPolicy
            }
            UserConsentVerificationResult::DeviceBusy => Self::DeviceBusy,
            UserConsentVerificationResult::RetriesExhausted => {
                Self::RetriesExhausted
            }
            UserConsentVerificationResult::Canceled => Self::Canceled,
            other => Self::Unrecognized(other.0),
        }
    }
}

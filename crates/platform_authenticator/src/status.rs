//! Values reported by the platform authenticator.

/// Whether user consent verification can be used on this device.
///
/// The set of values is defined by the platform; values this
/// crate does not know about are kept as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// A verifier device is available.
    Available,
    /// There is no verifier device available.
    DeviceNotPresent,
    /// The verifier device is not configured for the user.
    NotConfiguredForUser,
    /// Group policy has disabled the verifier device.
    DisabledByPolicy,
    /// The verifier device is performing an operation
    /// and is unavailable.
    DeviceBusy,
    /// Status value unknown to this crate.
    Unrecognized(i32),
}

impl Availability {
    /// Whether the consent prompt may be requested.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Outcome of a single verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationResult {
    /// User consent was verified.
    Verified,
    /// There is no verifier device available.
    DeviceNotPresent,
    /// The verifier device is not configured for the user.
    NotConfiguredForUser,
    /// Group policy has disabled the verifier device.
    DisabledByPolicy,
    /// The verifier device is performing an operation
    /// and is unavailable.
    DeviceBusy,
    /// After 10 attempts the original verification request and
    /// all subsequent attempts at the same verification were
    /// not verified.
    RetriesExhausted,
    /// The verification was canceled.
    Canceled,
    /// Result value unknown to this crate.
    Unrecognized(i32),
}

impl VerificationResult {
    /// Whether the user was verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

#![deny(missing_docs)]
#![cfg_attr(not(target_os = "windows"), forbid(unsafe_code))]
//! Ask the operating system to confirm that a user is present.
//!
//! The platform authenticator shows the system-native consent
//! prompt (Windows Hello fingerprint, face or PIN) and reports
//! how the user responded. Verification logic, biometric matching
//! and the prompt UI all live inside the operating system; this
//! crate only exposes the two operations the platform offers
//! behind the [UserConsentVerifier] trait and the one-shot
//! [verify] flow built on top of them.

mod error;
mod runtime;
mod status;
mod verifier;

#[cfg(target_os = "windows")]
mod windows_hello;
#[cfg(target_os = "windows")]
pub use windows_hello::PlatformVerifier;

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub use unsupported::PlatformVerifier;

pub use error::Error;
pub use runtime::RuntimeContext;
pub use status::{Availability, VerificationResult};
pub use verifier::{verify, Outcome, UserConsentVerifier};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown in the consent prompt when none is configured.
pub const DEFAULT_MESSAGE: &str = "Bekreft identitet";

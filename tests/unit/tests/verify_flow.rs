use anyhow::Result;
use presence_platform_authenticator::{
    verify, Availability, Error, Outcome, VerificationResult,
    DEFAULT_MESSAGE,
};
use presence_test_utils::{init_tracing, mock::MockVerifier};
use pretty_assertions::assert_eq;

const UNAVAILABLE: [Availability; 5] = [
    Availability::DeviceNotPresent,
    Availability::NotConfiguredForUser,
    Availability::DisabledByPolicy,
    Availability::DeviceBusy,
    Availability::Unrecognized(7),
];

const NOT_VERIFIED: [VerificationResult; 7] = [
    VerificationResult::Canceled,
    VerificationResult::DeviceBusy,
    VerificationResult::RetriesExhausted,
    VerificationResult::DisabledByPolicy,
    VerificationResult::DeviceNotPresent,
    VerificationResult::NotConfiguredForUser,
    VerificationResult::Unrecognized(99),
];

#[test]
fn unavailable_never_prompts() -> Result<()> {
    init_tracing();
    for availability in UNAVAILABLE {
        let verifier = MockVerifier::unavailable(availability);
        let outcome = verify(&verifier, DEFAULT_MESSAGE)?;
        assert_eq!(Outcome::Unavailable(availability), outcome);
        assert_eq!(2, outcome.exit_code());
        assert_eq!(1, verifier.availability_checks());
        assert_eq!(0, verifier.verification_requests());
    }
    Ok(())
}

#[test]
fn verified_user() -> Result<()> {
    init_tracing();
    let verifier = MockVerifier::available(VerificationResult::Verified);
    let outcome = verify(&verifier, DEFAULT_MESSAGE)?;
    assert_eq!(Outcome::Verified, outcome);
    assert_eq!(0, outcome.exit_code());
    Ok(())
}

#[test]
fn not_verified_collapses_to_one_code() -> Result<()> {
    init_tracing();
    for result in NOT_VERIFIED {
        let verifier = MockVerifier::available(result);
        let outcome = verify(&verifier, DEFAULT_MESSAGE)?;
        assert_eq!(Outcome::NotVerified(result), outcome);
        assert_eq!(1, outcome.exit_code());
    }
    Ok(())
}

#[test]
fn each_operation_runs_once() -> Result<()> {
    init_tracing();
    for result in NOT_VERIFIED
        .into_iter()
        .chain([VerificationResult::Verified])
    {
        let verifier = MockVerifier::available(result);
        verify(&verifier, "Approve payment")?;
        assert_eq!(1, verifier.availability_checks());
        assert_eq!(1, verifier.verification_requests());
        assert_eq!(vec!["Approve payment".to_owned()], verifier.messages());
    }
    Ok(())
}

#[test]
fn empty_message_makes_no_calls() {
    init_tracing();
    for message in ["", "  ", "\n\t"] {
        let verifier = MockVerifier::available(VerificationResult::Verified);
        let result = verify(&verifier, message);
        assert!(matches!(result, Err(Error::EmptyMessage)));
        assert_eq!(0, verifier.availability_checks());
        assert_eq!(0, verifier.verification_requests());
    }
}

#[test]
fn verify_through_trait_object() -> Result<()> {
    init_tracing();
    let verifier = MockVerifier::available(VerificationResult::Canceled);
    let dynamic: &dyn presence_platform_authenticator::UserConsentVerifier =
        &verifier;
    let outcome = verify(dynamic, DEFAULT_MESSAGE)?;
    assert_eq!(Outcome::NotVerified(VerificationResult::Canceled), outcome);
    Ok(())
}

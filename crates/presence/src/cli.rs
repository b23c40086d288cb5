//! Command line interface.
use clap::{builder::NonEmptyStringValueParser, Parser};
use presence_platform_authenticator::{
    verify, Outcome, PlatformVerifier, RuntimeContext, UserConsentVerifier,
    DEFAULT_MESSAGE,
};

use crate::{ExitStatus, Result, TARGET};

/// Ask the operating system to confirm that a user is present.
///
/// Exits with 0 when verified, 1 when verification was declined,
/// canceled or failed, 2 when verification is not available and
/// 3 on fatal errors, including help and version requests
/// which never count as a verification.
#[derive(Parser, Debug)]
#[clap(name = "presence", author, version, about, long_about = None)]
pub struct Cli {
    /// Message shown in the consent prompt.
    #[clap(
        short,
        long,
        default_value = DEFAULT_MESSAGE,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub message: String,
}

/// Parse command line arguments.
///
/// Help and version output as well as usage errors are printed
/// and reported as [ExitStatus::Fatal] so that exit code zero is
/// only ever produced by a verified user.
pub fn parse_from<I, T>(args: I) -> std::result::Result<Cli, ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        if let Err(error) = e.print() {
            tracing::error!(target: TARGET, error = %error, "print usage");
        }
        ExitStatus::Fatal
    })
}

/// Run a user presence check with the platform verifier.
///
/// The runtime context is released before this function
/// returns, on success and on error.
pub fn run(args: Cli) -> Result<Outcome> {
    let _runtime = RuntimeContext::init()?;
    run_with(&PlatformVerifier, &args)
}

/// Run a user presence check with the given verifier.
pub fn run_with<V>(verifier: &V, args: &Cli) -> Result<Outcome>
where
    V: UserConsentVerifier + ?Sized,
{
    let outcome = verify(verifier, &args.message)?;
    tracing::info!(target: TARGET, ?outcome, "presence");
    Ok(outcome)
}

#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Command line tool that asks the operating system to confirm
//! that a user is present and reports the outcome as the
//! process exit code.
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | User presence was verified                     |
//! | 1    | Verification was declined, canceled or failed  |
//! | 2    | Verification is not available on this device   |
//! | 3    | Fatal error                                    |

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "presence";

pub mod cli;
mod error;
mod exit_status;
pub mod logs;

pub use error::Error;
pub use exit_status::ExitStatus;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, Error>;

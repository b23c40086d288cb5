use presence::{cli, logs, ExitStatus, TARGET};
use std::process::ExitCode;

fn main() -> ExitCode {
    logs::init_subscriber();

    let args = match cli::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(status) => return status.into(),
    };

    let status = match cli::run(args) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!(target: TARGET, "{}", e);
            ExitStatus::Fatal
        }
    };
    status.into()
}

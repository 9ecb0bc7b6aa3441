//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::MapUnreadable { .. } => exitcode::NOINPUT,
                ApplicationError::InvalidMap { .. } | ApplicationError::Domain(_) => {
                    exitcode::DATAERR
                }
                ApplicationError::Console { .. } => exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_application_errors_when_mapping_then_uses_sysexits_codes() {
        let cases = [
            (
                ApplicationError::Config {
                    message: "bad".into(),
                },
                exitcode::CONFIG,
            ),
            (
                ApplicationError::MapUnreadable {
                    path: PathBuf::from("x.toml"),
                    source: io::Error::from(io::ErrorKind::NotFound),
                },
                exitcode::NOINPUT,
            ),
            (
                ApplicationError::InvalidMap {
                    path: PathBuf::from("x.toml"),
                    message: "missing field `name`".into(),
                },
                exitcode::DATAERR,
            ),
            (ApplicationError::Domain(DomainError::MissingRoot), exitcode::DATAERR),
            (
                ApplicationError::console("read", io::Error::from(io::ErrorKind::BrokenPipe)),
                exitcode::IOERR,
            ),
        ];

        for (error, code) in cases {
            assert_eq!(CliError::from(error).exit_code(), code);
        }
    }
}

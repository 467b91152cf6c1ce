use std::io;
use std::path::PathBuf;

use ragebeam_fetch::{ClientSettingError, FetchError, Os, ParseOsError, Phase};
use thiserror::Error;

/// Input problems exit with the same code clap uses for usage errors.
pub const EXIT_INPUT: u8 = 2;
pub const EXIT_AUTH: u8 = 3;
pub const EXIT_RETRIEVAL: u8 = 4;
pub const EXIT_DOWNLOAD: u8 = 5;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Client(#[from] ClientSettingError),

    #[error(transparent)]
    Os(#[from] ParseOsError),

    #[error("destination folder {} does not exist or is not a directory", .0.display())]
    Destination(PathBuf),

    #[error("the download page lists no installers for {0}")]
    NoInstallers(Os),

    #[error("selection {0:?} is not a number")]
    NotANumber(String),

    #[error("selection {index} is out of range, expected 0 to {}", .len.saturating_sub(1))]
    OutOfRange { index: usize, len: usize },

    #[error("failed to read selection")]
    Input(#[source] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Fetch(e) => match e.phase() {
                Phase::Auth => EXIT_AUTH,
                Phase::Retrieval => EXIT_RETRIEVAL,
                Phase::Download => EXIT_DOWNLOAD,
            },
            _ => EXIT_INPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragebeam_fetch::StatusCode;

    #[test]
    fn test_exit_codes_by_phase() {
        let auth = CliError::from(FetchError::LoginRejected(StatusCode::FORBIDDEN));
        let retrieval = CliError::from(FetchError::NoLinks {
            attempts: 15,
            source: None,
            last_status: None,
        });
        let download = CliError::from(FetchError::ContentLength);

        assert_eq!(auth.exit_code(), EXIT_AUTH);
        assert_eq!(retrieval.exit_code(), EXIT_RETRIEVAL);
        assert_eq!(download.exit_code(), EXIT_DOWNLOAD);
        assert_eq!(CliError::NotANumber("x".into()).exit_code(), EXIT_INPUT);
        assert_eq!(CliError::OutOfRange { index: 9, len: 2 }.exit_code(), EXIT_INPUT);
    }

    #[test]
    fn test_alternate_rendering_includes_causes() {
        let err = CliError::Input(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "failed to read selection: stdin closed"
        );

        let err = CliError::from(FetchError::NoLinks {
            attempts: 15,
            source: None,
            last_status: Some(StatusCode::SERVICE_UNAVAILABLE),
        });
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "wasn't able to get links list after 15 attempts (last status 503 Service Unavailable)"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CliError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "selection 7 is out of range, expected 0 to 2");
    }
}

use std::{collections::TryReserveError, io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced to the user on the status line.
///
/// None of these end the session; the browser state is left as it was
/// before the failing action.
#[derive(Debug, Error)]
pub enum AppError {
    /// Listing or entering a directory failed.
    #[error("cannot change directory to {}: {}", path.display(), describe_io(source))]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pager could not stat or read the target file.
    #[error("cannot access {}: {}", path.display(), describe_io(source))]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Storage for the pager's copy of a file could not be reserved.
    #[error("cannot allocate memory for {} ({bytes} bytes)", path.display())]
    Allocation {
        path: PathBuf,
        bytes: u64,
        #[source]
        source: TryReserveError,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

fn describe_io(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::PermissionDenied => "permission denied".to_owned(),
        io::ErrorKind::NotFound => "no such file or directory".to_owned(),
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_access_message() {
        let err = AppError::DirectoryAccess {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.to_string(),
            "cannot change directory to /nope: no such file or directory"
        );
    }

    #[test]
    fn test_unknown_command_message() {
        let err = AppError::UnknownCommand("zz".to_owned());
        assert_eq!(err.to_string(), "unknown command: zz");
    }
}

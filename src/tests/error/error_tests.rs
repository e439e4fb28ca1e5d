//! Tests for error display and classification.

use std::path::PathBuf;

use crate::error::{Error, Stage};

#[test]
fn display_includes_stage_target_and_cause() {
    let err = Error::io(
        Stage::Open,
        "/tmp/out.txt",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.to_string(), "[Open] /tmp/out.txt: denied");
    assert!(err.is_io());
    assert_eq!(err.stage(), Some(Stage::Open));
}

#[test]
fn write_errors_convert_from_io() {
    let err: Error = std::io::Error::other("pipe closed").into();
    assert!(err.is_io());
    assert_eq!(err.stage(), Some(Stage::Write));
}

#[test]
fn argument_errors_are_not_io() {
    let conflict = Error::PathConflict {
        path: PathBuf::from("/tmp"),
    };
    assert_eq!(conflict.to_string(), "'/tmp' is not a plain file");
    assert!(!conflict.is_io());
    assert_eq!(conflict.stage(), None);

    let missing = Error::InvalidArgument("no filename provided".into());
    assert_eq!(missing.to_string(), "Invalid argument: no filename provided");
    assert!(!missing.is_io());
}

#[test]
fn stage_display() {
    assert_eq!(Stage::Open.to_string(), "Open");
    assert_eq!(Stage::Write.to_string(), "Write");
    assert_eq!(Stage::Close.to_string(), "Close");
}

#[cfg(feature = "miette")]
#[test]
fn diagnostic_carries_help() {
    let diag = crate::WriteDiagnostic::from(Error::InvalidArgument("no filename provided".into()));
    assert_eq!(diag.message, "Invalid argument: no filename provided");
    assert!(diag.help.is_some());
}

//! The remote session collaborator.
//!
//! A [`Session`] is an already-established, authenticated connection. The
//! client only needs its working directory and a handful of raw, wire-level
//! primitives that take absolute paths. Connection setup, authentication and
//! teardown belong to the implementor.

mod local;

use std::future::Future;

use thiserror::Error;

use crate::models::FileEntry;

pub use local::LocalSession;

/// SFTP v3 status codes carried by `SSH_FXP_STATUS` replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StatusCode {
    Ok = 0,
    Eof = 1,
    NoSuchFile = 2,
    PermissionDenied = 3,
    Failure = 4,
    BadMessage = 5,
    NoConnection = 6,
    ConnectionLost = 7,
    OpUnsupported = 8,
}

impl StatusCode {
    /// The message OpenSSH's sftp-server sends with this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Success",
            Self::Eof => "End of file",
            Self::NoSuchFile => "No such file",
            Self::PermissionDenied => "Permission denied",
            Self::Failure => "Failure",
            Self::BadMessage => "Bad message",
            Self::NoConnection => "No connection",
            Self::ConnectionLost => "Connection lost",
            Self::OpUnsupported => "Operation unsupported",
        }
    }
}

/// Errors reported by a session primitive.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The server answered with a non-OK status and a reason string.
    #[error("{message}")]
    Status { code: StatusCode, message: String },

    /// The request never got a status reply.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SessionError {
    /// A status error carrying the code's standard message.
    pub fn status(code: StatusCode) -> Self {
        Self::Status {
            code,
            message: code.as_str().to_string(),
        }
    }

    pub fn code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Transport(_) => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    /// Maps errno the way sftp-server does: missing paths and permission
    /// problems keep their own codes, everything else is a generic failure.
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::status(StatusCode::NoSuchFile),
            std::io::ErrorKind::PermissionDenied => Self::status(StatusCode::PermissionDenied),
            std::io::ErrorKind::Unsupported => Self::status(StatusCode::OpUnsupported),
            _ => Self::status(StatusCode::Failure),
        }
    }
}

/// An open, authenticated remote session.
///
/// All path arguments are absolute remote paths. Implementations are shared
/// by reference across concurrent requests, so methods take `&self`.
pub trait Session: Send + Sync {
    /// Snapshot of the remote current working directory.
    fn cwd(&self) -> String;

    /// Issue one `SSH_FXP_RENAME` request.
    fn rename_raw(
        &self,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Read every entry of a remote directory.
    fn list_raw(&self, dir: &str)
        -> impl Future<Output = Result<Vec<FileEntry>, SessionError>> + Send;

    /// `lstat` a remote path.
    fn stat_raw(&self, path: &str)
        -> impl Future<Output = Result<FileEntry, SessionError>> + Send;
}

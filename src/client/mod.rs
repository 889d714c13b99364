//! SFTP client facade over a [`Session`].
//!
//! Every method resolves its path arguments against the session's current
//! working directory before touching the wire.

mod rename;

pub use rename::*;

use thiserror::Error;

use crate::models::{FileEntry, FileKind, Renamed};
use crate::path;
use crate::session::{Session, SessionError, StatusCode};

/// Errors from listing and stat operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No such file: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Server error: {path}: {detail}")]
    Server { path: String, detail: String },
}

impl ClientError {
    fn from_session(path: String, err: SessionError) -> Self {
        match err.code() {
            Some(StatusCode::NoSuchFile) => Self::NotFound(path),
            Some(StatusCode::PermissionDenied) => Self::PermissionDenied(path),
            _ => Self::Server {
                path,
                detail: err.to_string(),
            },
        }
    }
}

/// SFTP client bound to one open session.
#[derive(Debug, Clone)]
pub struct SftpClient<S> {
    session: S,
}

impl<S: Session> SftpClient<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// The remote current working directory.
    pub fn cwd(&self) -> String {
        self.session.cwd()
    }

    /// Rename a remote file or directory. See [`rename()`].
    pub async fn rename(&self, from: &str, to: &str) -> Result<Renamed, RenameError> {
        rename::rename(&self.session, from, to).await
    }

    /// List a remote directory.
    pub async fn list(&self, dir: &str) -> Result<Vec<FileEntry>, ClientError> {
        let dir = path::resolve(dir, &self.session.cwd());
        tracing::debug!("Listing {}", dir);
        let listing = self.session.list_raw(&dir).await;
        listing.map_err(|e| ClientError::from_session(dir, e))
    }

    /// Report what kind of entry lives at `path`, or `None` if nothing does.
    pub async fn exists(&self, path: &str) -> Result<Option<FileKind>, ClientError> {
        let path = path::resolve(path, &self.session.cwd());
        let stat = self.session.stat_raw(&path).await;
        match stat {
            Ok(entry) => Ok(Some(entry.kind)),
            Err(e) if e.code() == Some(StatusCode::NoSuchFile) => Ok(None),
            Err(e) => Err(ClientError::from_session(path, e)),
        }
    }
}

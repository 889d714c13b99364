use thiserror::Error;

use crate::models::{FailureKind, Renamed};
use crate::path;
use crate::session::{Session, SessionError, StatusCode};

/// A rename the server refused.
///
/// `detail` is the server or transport message, unmodified. The display
/// string always contains "No such file" for [`RenameError::NotFound`] and
/// "Bad path" for [`RenameError::PathConflict`] so callers matching on text
/// keep working.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("No such file {from}: {detail}")]
    NotFound { from: String, to: String, detail: String },

    #[error("Bad path {to}: {detail}")]
    PathConflict { from: String, to: String, detail: String },

    #[error("rename {from} to {to} failed: {detail}")]
    Protocol { from: String, to: String, detail: String },
}

impl RenameError {
    /// Classify a raw session error for the resolved `from`/`to` pair.
    pub fn classify(from: String, to: String, err: SessionError) -> Self {
        let detail = err.to_string();
        match err.code() {
            Some(StatusCode::NoSuchFile) => Self::NotFound { from, to, detail },
            Some(StatusCode::Failure) => Self::PathConflict { from, to, detail },
            _ => Self::Protocol { from, to, detail },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::PathConflict { .. } => FailureKind::PathConflict,
            Self::Protocol { .. } => FailureKind::Protocol,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound { detail, .. }
            | Self::PathConflict { detail, .. }
            | Self::Protocol { detail, .. } => detail,
        }
    }
}

/// Rename `from` to `to` on the remote side of `session`.
///
/// Both paths are resolved against one snapshot of the session's working
/// directory, then exactly one rename request is sent. Nothing is checked
/// beforehand and nothing is retried; the server enforces conflict rules.
pub async fn rename<S: Session>(session: &S, from: &str, to: &str) -> Result<Renamed, RenameError> {
    let cwd = session.cwd();
    let from = path::resolve(from, &cwd);
    let to = path::resolve(to, &cwd);
    tracing::debug!("Resolved rename against {}: {} -> {}", cwd, from, to);

    match session.rename_raw(&from, &to).await {
        Ok(()) => {
            let renamed = Renamed { from, to };
            tracing::info!("{}", renamed);
            Ok(renamed)
        }
        Err(err) => {
            let err = RenameError::classify(from, to, err);
            tracing::warn!("Rename rejected ({}): {}", err.kind().as_str(), err);
            Err(err)
        }
    }
}

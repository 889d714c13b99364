use std::fs::Metadata;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::{Session, SessionError, StatusCode};
use crate::config::Config;
use crate::models::{FileEntry, FileKind};
use crate::path;

/// A loopback session serving a local directory as the remote filesystem.
///
/// Remote `/` maps to `root`. A `..` that would climb above it is refused
/// with `SSH_FX_PERMISSION_DENIED`. Rename follows sftp-server: an existing
/// destination is refused with `SSH_FX_FAILURE` rather than overwritten.
#[derive(Debug, Clone)]
pub struct LocalSession {
    root: PathBuf,
    cwd: String,
}

impl LocalSession {
    /// Serve `root`, starting in remote `/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cwd: "/".to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.root.clone()).with_cwd(config.cwd.clone())
    }

    /// Change the working directory reported by [`Session::cwd`].
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a remote path onto the local root.
    fn local_path(&self, remote: &str) -> Result<PathBuf, SessionError> {
        if remote.is_empty() {
            return Err(SessionError::status(StatusCode::NoSuchFile));
        }
        let absolute = path::resolve(remote, &self.cwd);

        let mut segments: Vec<&str> = Vec::new();
        for segment in absolute.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(SessionError::status(StatusCode::PermissionDenied));
                    }
                }
                s => segments.push(s),
            }
        }

        let mut local = self.root.clone();
        local.extend(segments);
        Ok(local)
    }
}

impl Session for LocalSession {
    fn cwd(&self) -> String {
        self.cwd.clone()
    }

    async fn rename_raw(&self, from: &str, to: &str) -> Result<(), SessionError> {
        let src = self.local_path(from)?;
        let dst = self.local_path(to)?;
        let meta = tokio::fs::symlink_metadata(&src).await?;

        if meta.file_type().is_file() {
            // link + unlink refuses an existing destination atomically
            match tokio::fs::hard_link(&src, &dst).await {
                Ok(()) => {
                    if let Err(err) = tokio::fs::remove_file(&src).await {
                        if let Err(cleanup) = tokio::fs::remove_file(&dst).await {
                            tracing::warn!("Failed to remove {}: {}", dst.display(), cleanup);
                        }
                        return Err(err.into());
                    }
                    return Ok(());
                }
                Err(err) if link_unavailable(&err) => {
                    tracing::debug!("hard link unavailable, falling back to rename: {}", err);
                }
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    return Err(SessionError::status(StatusCode::Failure));
                }
                Err(err) => return Err(err.into()),
            }
        }

        if tokio::fs::symlink_metadata(&dst).await.is_ok() {
            return Err(SessionError::status(StatusCode::Failure));
        }
        tokio::fs::rename(&src, &dst).await?;
        Ok(())
    }

    async fn list_raw(&self, dir: &str) -> Result<Vec<FileEntry>, SessionError> {
        let local = self.local_path(dir)?;
        let mut reader = tokio::fs::read_dir(&local).await?;

        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let meta = entry.metadata().await?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(to_entry(name, &meta));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn stat_raw(&self, remote: &str) -> Result<FileEntry, SessionError> {
        let local = self.local_path(remote)?;
        let meta = tokio::fs::symlink_metadata(&local).await?;
        Ok(to_entry(path::file_name(remote).to_string(), &meta))
    }
}

/// Only these link errors fall back to a plain rename.
fn link_unavailable(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::Unsupported | std::io::ErrorKind::CrossesDevices
    )
}

fn to_entry(name: String, meta: &Metadata) -> FileEntry {
    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else {
        FileKind::File
    };

    FileEntry {
        kind,
        name,
        size: meta.len(),
        modify_time: meta.modified().ok().map(DateTime::<Utc>::from),
        rights: rights(meta),
    }
}

#[cfg(unix)]
fn rights(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn rights(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

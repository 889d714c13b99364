//! Runtime configuration for the loopback session.
//!
//! Read from the environment, then overridden by CLI flags:
//! - `SFTP_RENAME_ROOT` - Local directory served as remote `/` (default: the
//!   platform data dir, e.g. `~/.local/share/sftp-rename/remote`)
//! - `SFTP_RENAME_CWD` - Remote working directory (default: `/`)

use std::path::PathBuf;

use anyhow::Result;

const DEFAULT_CWD: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub cwd: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let root = match std::env::var_os("SFTP_RENAME_ROOT") {
            Some(root) => PathBuf::from(root),
            None => default_root()?,
        };
        let cwd = std::env::var("SFTP_RENAME_CWD").unwrap_or_else(|_| DEFAULT_CWD.to_string());
        Self::new(root, cwd)
    }

    /// Explicit configuration. The working directory must be absolute.
    pub fn new(root: impl Into<PathBuf>, cwd: impl Into<String>) -> Result<Self> {
        let cwd = cwd.into();
        if !cwd.starts_with('/') {
            anyhow::bail!("Remote working directory must be absolute, got {:?}", cwd);
        }
        Ok(Self {
            root: root.into(),
            cwd,
        })
    }

    /// Apply CLI overrides on top of this configuration.
    pub fn with_overrides(self, root: Option<PathBuf>, cwd: Option<String>) -> Result<Self> {
        Self::new(root.unwrap_or(self.root), cwd.unwrap_or(self.cwd))
    }
}

fn default_root() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "sftp-rename")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("remote"))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a remote directory listing.
///
/// Only `name` is relied on by rename callers verifying an outcome; the
/// remaining attributes are whatever the server reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Final path segment, without the directory part.
    pub name: String,
    pub size: u64,
    pub modify_time: Option<DateTime<Utc>>,
    /// Permission bits (`0o777` mask).
    pub rights: u32,
}

/// The type of a remote filesystem entry, in `ls -l` notation.
///
/// - `Directory`: `d`
/// - `File`: `-`
/// - `Symlink`: `l`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileKind {
    #[serde(rename = "d")]
    Directory,
    #[serde(rename = "-")]
    File,
    #[serde(rename = "l")]
    Symlink,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "d",
            Self::File => "-",
            Self::Symlink => "l",
        }
    }
}

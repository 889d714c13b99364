use std::fmt;

/// A completed rename.
///
/// Both paths are the resolved absolute forms that were sent to the server,
/// not the caller's original input. Displays as
/// `Successfully renamed <from> to <to>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: String,
    pub to: String,
}

impl Renamed {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Renamed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully renamed {} to {}", self.from, self.to)
    }
}

/// Why a rename was refused.
///
/// - `NotFound`: the source does not exist
/// - `PathConflict`: the destination exists or the server rejected the path
/// - `Protocol`: anything else the server or transport reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    PathConflict,
    Protocol,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PathConflict => "path_conflict",
            Self::Protocol => "protocol",
        }
    }
}

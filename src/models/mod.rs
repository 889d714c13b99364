//! Values exchanged with the remote session.
//!
//! - [`FileEntry`]: one row of a directory listing, with its [`FileKind`].
//! - [`Renamed`]: the success value of a rename, echoing resolved paths.
//! - [`FailureKind`]: the classification attached to a failed rename.

mod entry;
mod outcome;

pub use entry::*;
pub use outcome::*;

//! SFTP client rename operation.
//!
//! Caller-supplied remote paths are resolved against the session's current
//! working directory by [`path::resolve`], then handed to the session's raw
//! rename primitive by [`client::rename`], which classifies the outcome.

pub mod client;
pub mod config;
pub mod models;
pub mod path;
pub mod session;

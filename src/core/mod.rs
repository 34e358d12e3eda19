//! High-level business logic behind each command.

pub mod convert;
pub(crate) mod fs_utils;
pub mod ingest;
pub mod export;
pub mod log;
pub mod stats;

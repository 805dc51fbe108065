//! Infrastructure layer for filesystem locations.
//!
//! Utilities with no domain knowledge: where the data root, the report
//! records, and the log file live on disk.

pub mod paths;

pub use paths::{data_dir, log_path, reports_dir};

//! Tracing-based observability with rotating file output.
//!
//! The UI owns stdout, so log lines are written to `data/nippo.log` through a
//! size-rotating writer (10 MB, 3 backups). Level is controlled via
//! `RUST_LOG`, then the `log_level` config option, then the `"info"` default.
//!
//! # Usage
//!
//! Initialize early in the process lifecycle, before the store:
//!
//! ```no_run
//! use nippo::observability::init_tracing;
//! use nippo::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("starting up");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;

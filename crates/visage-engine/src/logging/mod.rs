//! Logging utilities.
//!
//! Centralizes logger initialization so hosts and tests share one setup
//! path. Only the standard `log` facade is assumed; `env_logger` is the
//! backend wired in here.

mod init;

pub use init::{LoggingConfig, init_logging};

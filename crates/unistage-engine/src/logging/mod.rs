//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade. This module wires up the
//! `env_logger` backend for binaries and tools that embed the engine.

mod init;

pub use init::{LoggingConfig, init_logging};

//! Structured logging to a rotating file.
//!
//! Plugins have no terminal of their own to log to, so `tracing` events are
//! formatted by `tracing-subscriber` and appended to
//! `~/.local/share/zellij/charpick/charpick.log` (through the sandbox's
//! `/host` mount). The file rotates at 10 MB and keeps three backups.
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` config option, which accepts any
//! `EnvFilter` directive (`debug`, `charpick::fetch=trace`, ...). Default:
//! `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, try_init_tracing, DEFAULT_TRACE_LEVEL};

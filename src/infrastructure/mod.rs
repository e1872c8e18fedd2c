//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; paths
//! coming from user configuration have to be translated before use.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, log_file_path};

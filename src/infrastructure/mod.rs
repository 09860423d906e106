//! Infrastructure layer for filesystem and environment interactions.
//!
//! The plugin runs in the Zellij sandbox where the host filesystem is mounted
//! under `/host`; everything that turns configuration into concrete paths
//! lives here.

pub mod paths;

pub use paths::{default_data_dir, expand_tilde, storage_path, STORAGE_FILE_NAME};

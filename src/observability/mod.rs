//! File-based logging.
//!
//! `tracing` macros and spans throughout the crate feed a
//! `tracing-subscriber` registry installed by [`init_tracing`]:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → <data_dir>/countryscope.log
//! ```
//!
//! # Configuration
//!
//! The level comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive, e.g. `countryscope=debug`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: size-rotating file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};

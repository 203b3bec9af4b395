//! Logger setup for hosts embedding a viewport.
//!
//! The crate itself only emits through the `log` facade: viewport lifecycle
//! at `debug`, per-frame timing at `trace`, ignored input at `warn`.

mod init;

pub use init::{init_logging, LoggingConfig};

//! Structured logging for consolidation runs
//!
//! - `init(profile)` installs the subscriber once, for the CLI
//! - `log_op_start!` / `log_op_end!` / `log_op_error!` bracket each pipeline
//!   stage and the repository load
//! - `init_test_capture()` records events in memory so tests can inspect one
//!   run's stages, warnings and errors by its run id
//!
//! Data-quality warnings are emitted by
//! [`ConsolidationReport`](crate::report::ConsolidationReport) with
//! `event = "data_quality"`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

//! Command Line Interface (CLI) layer for GRADECALC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for evaluating a semester's marks
//! and emitting the grade report. It wires user-provided options to the
//! underlying library functionality exposed via `gradecalc::api`.
//!
//! If you are embedding GRADECALC into another application, prefer using
//! the high-level `gradecalc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

//! Command Line Interface (CLI) layer for notestitch.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`): load the directory, stitch, and save next to the
//! sources. If you are embedding notestitch into another application,
//! prefer the high-level `notestitch::api` module instead.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

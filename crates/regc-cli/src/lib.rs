//! # regc CLI Library
//!
//! Handler modules for the `regc` binary. Each subcommand module owns
//! its clap `Args` struct and a `run` function; `main` only parses and
//! dispatches. Output is JSON on stdout so results pipe cleanly into
//! other tools; diagnostics go to stderr via `tracing`.

pub mod assess;
pub mod classify;
pub mod input;
pub mod overlaps;
pub mod validate;

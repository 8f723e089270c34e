//! Running pace and split timestamp calculator.
//!
//! The core is a handful of pure functions: [`pace::compute_pace`] derives the
//! average pace, [`splits`] turns it into elapsed-time checkpoints and
//! [`utils`] converts between seconds and `HH:MM:SS`. The [`plan`] module
//! resolves a [`models::PaceRequest`] into a [`models::PaceResponse`] and is
//! shared by the `pace` CLI and the `pace-api` HTTP server.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod pace;
pub mod plan;
pub mod splits;
pub mod utils;

pub use errors::PaceError;
pub use splits::{SplitConfig, SplitStrategy};

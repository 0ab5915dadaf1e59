#![warn(unused_crate_dependencies)]

pub mod cli;
mod commands;
mod output;
mod prompt;
pub mod runtime;
pub mod tracing;

pub use commands::run;

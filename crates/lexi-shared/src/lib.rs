//! Types shared between the LexiAI client crates

#![warn(unused_crate_dependencies)]

pub mod analysis;
pub mod billing;
pub mod const_config;
pub mod document;
pub mod errors;
pub mod forms;
pub mod id;
mod macros;
pub mod organization;
pub mod req_args;
pub mod responses;
pub mod token;
pub mod uac;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

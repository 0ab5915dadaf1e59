//! Stores the functionality needed by LexiAI clients to talk to the backend
//! and keep track of who is logged in and which organization is selected.
//! NB: The assumption is made that the tokio runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod cancellation;
mod client;
pub mod configuration;
pub mod guards;
pub mod organizations;
pub mod session;
pub mod storage;
mod store;

pub use cancellation::RequestSlot;
pub use client::{api::DocumentUpload, Client, Payload, UiCallBack};
pub use organizations::{OrganizationState, OrganizationStore};
pub use session::{Session, SessionState};
pub use store::AppStore;

//! Shared items related to user accounts

mod user;

pub use user::{Email, FullName, User};

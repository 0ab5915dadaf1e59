mod auth;
mod billing;
mod documents;
mod helpers;
mod organizations;
mod store;

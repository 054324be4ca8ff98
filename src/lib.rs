pub mod access;
pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod session;
pub mod suggest;
pub mod tracker;

pub use config::Config;
pub use session::Session;

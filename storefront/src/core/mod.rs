//! Configuration and session wiring

pub mod config;
pub mod session;

pub use config::Config;
pub use session::Storefront;

pub mod config;
pub mod driver;
pub mod engine;
pub mod notifier;
pub mod status;

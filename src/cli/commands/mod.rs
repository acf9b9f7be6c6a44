pub mod config;
pub mod init;
pub mod schedule;
pub mod status;
pub mod watch;

pub mod checksum;
pub mod config;
pub mod logging;
pub mod xva;

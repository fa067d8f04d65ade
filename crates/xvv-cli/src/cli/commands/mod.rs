//! CLI command handlers, one per file.

mod checksum;
mod validate;

pub use checksum::run_checksum;
pub use validate::run_validate;

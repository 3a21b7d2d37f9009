//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod common;
pub mod list;
pub mod replay;
pub mod status;
pub mod watch;

pub use list::run_list;
pub use replay::run_replay;
pub use status::run_status;
pub use watch::run_watch;

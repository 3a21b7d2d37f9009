//! Service layer for battery monitoring
//!
//! Services are the host integration points that drive the threshold
//! monitor: the long-running watch loop and the status view.

pub mod status;
pub mod watch;

pub use status::StatusView;
pub use watch::{TickOutcome, WatchConfig, WatchService, WatchSummary};

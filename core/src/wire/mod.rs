pub mod command;
pub mod snapshot;

pub use command::Command;
pub use snapshot::{HistoryEntry, StationSnapshot, TickSnapshot};

pub mod battery;
pub mod collector;
pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;
pub mod types;

pub use collector::collect_snapshot;
pub use types::*;

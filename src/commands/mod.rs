// Command handlers module
pub mod all;
pub mod battery;
pub mod completions;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod speedtest;
pub mod uptime;
pub mod version;
pub mod welcome;

// Re-exports for cleaner imports
pub use version::execute as version;
pub use welcome::execute as welcome;

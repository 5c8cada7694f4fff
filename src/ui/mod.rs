// UI and formatting module

pub mod render;
pub mod table;

// Re-export commonly used items for cleaner imports
pub use table::{Cell, Table, Tone};

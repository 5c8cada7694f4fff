// Core metric sampling and conversion logic

pub mod speedtest;
pub mod system_info;
pub mod units;

// Re-export commonly used items
pub use system_info::{collect_snapshot, SystemSnapshot};
pub use units::{
    classify, format_duration, format_time_remaining, scale_bytes, DurationBreakdown,
    SeverityBand, Unit,
};

//! Pure conversions between raw metric samples and display-ready values.
//!
//! Everything in this module is a stateless function of its input: no I/O,
//! no clock reads, no shared state. The presentation layer owns all string
//! formatting and color selection; this module only does the arithmetic.

use crate::error::{Result, SysTrackError};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Target unit for byte scaling. Each step is a factor of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
}

impl Unit {
    fn divisor(self) -> f64 {
        match self {
            Unit::B => 1.0,
            Unit::KB => KB,
            Unit::MB => MB,
            Unit::GB => GB,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::B => write!(f, "B"),
            Unit::KB => write!(f, "KB"),
            Unit::MB => write!(f, "MB"),
            Unit::GB => write!(f, "GB"),
        }
    }
}

/// Scale a raw byte count to the caller's target unit.
///
/// There is no automatic unit selection: memory and disk totals are shown in
/// GB, network counters in MB, and the caller states which one it wants. The
/// result is a plain number meant for `{:.2}` display.
pub fn scale_bytes(bytes: u64, unit: Unit) -> f64 {
    bytes as f64 / unit.divisor()
}

/// Elapsed time split into whole hours, minutes and seconds.
///
/// `minutes` and `seconds` are always in `0..=59`; `hours` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Break an elapsed-seconds quantity into whole hours, minutes and seconds.
///
/// Sub-second remainders are discarded (truncated, not rounded), so
/// `hours*3600 + minutes*60 + seconds` is within one second below the input.
/// Negative or non-finite input is rejected as `InvalidInput`.
pub fn format_duration(elapsed_seconds: f64) -> Result<DurationBreakdown> {
    if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
        return Err(SysTrackError::invalid_input(format!(
            "elapsed seconds must be finite and non-negative, got {}",
            elapsed_seconds
        )));
    }

    // `as` truncates toward zero and saturates on overflow, keeping this
    // total over every non-negative finite input.
    let total = elapsed_seconds as u64;

    Ok(DurationBreakdown {
        hours: total / 3600,
        minutes: (total % 3600) / 60,
        seconds: total % 60,
    })
}

/// Format a battery time estimate, `None` meaning the OS reported no estimate.
///
/// Battery displays are coarser than uptime: seconds are dropped.
pub fn format_time_remaining(seconds_left: Option<u64>) -> String {
    match seconds_left {
        None => "Unknown".to_string(),
        Some(secs) => {
            let hours = secs / 3600;
            let minutes = (secs % 3600) / 60;
            format!("{}h {}m", hours, minutes)
        }
    }
}

/// Severity band for a usage percentage, used for presentational coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    Normal,
    Warning,
    Critical,
}

/// Classify a usage percentage into a severity band.
///
/// Strictly above 80.0 is Critical, strictly above 50.0 is Warning,
/// everything else is Normal. Exactly 80.0 is Warning and exactly 50.0 is
/// Normal. Values outside `[0, 100]` are not clamped; some platforms report
/// CPU usage above 100 and this only compares.
pub fn classify(percent: f64) -> SeverityBand {
    if percent > 80.0 {
        SeverityBand::Critical
    } else if percent > 50.0 {
        SeverityBand::Warning
    } else {
        SeverityBand::Normal
    }
}

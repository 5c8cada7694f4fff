use crate::core::system_info::types::MemorySample;
use crate::error::Result;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

pub fn collect() -> Result<MemorySample> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
    let sys = System::new_with_specifics(refresh);

    let total = sys.total_memory();
    let used = sys.used_memory();
    let available = sys.available_memory();
    let swap_total = sys.total_swap();
    let swap_used = sys.used_swap();

    Ok(MemorySample {
        total_bytes: total,
        used_bytes: used,
        available_bytes: available,
        usage_percent: percent_of(used, total),
        swap_total_bytes: swap_total,
        swap_used_bytes: swap_used,
        swap_usage_percent: percent_of(swap_used, swap_total),
    })
}

pub fn get_fallback() -> MemorySample {
    MemorySample {
        total_bytes: 0,
        used_bytes: 0,
        available_bytes: 0,
        usage_percent: 0.0,
        swap_total_bytes: 0,
        swap_used_bytes: 0,
        swap_usage_percent: 0.0,
    }
}

// Swap may legitimately be absent, so a zero total maps to 0% instead of NaN.
fn percent_of(used: u64, total: u64) -> f32 {
    if total > 0 {
        (used as f32 / total as f32) * 100.0
    } else {
        0.0
    }
}

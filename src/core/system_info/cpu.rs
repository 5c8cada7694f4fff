use crate::core::system_info::types::{CpuSample, LoadAverage};
use crate::error::{Result, SysTrackError};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Sample the CPU over the given interval.
///
/// Usage percentages are the delta between two refreshes, so the call blocks
/// for roughly `interval`. Intervals below sysinfo's minimum are raised to it
/// or the second refresh would read garbage. A host that exposes no CPUs at
/// all is a collection error; the snapshot collector degrades it to
/// `get_fallback()`.
pub fn collect(interval: Duration) -> Result<CpuSample> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    // Need to refresh twice to get accurate frequency and usage
    sys.refresh_cpu_all();
    std::thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(SysTrackError::metric_collection(
            "no CPUs visible to the sampler",
        ));
    }

    let first_cpu = &cpus[0];
    let per_core_usage_percent: Vec<f32> = cpus.iter().map(|cpu| cpu.cpu_usage()).collect();
    let load = System::load_average();

    Ok(CpuSample {
        model: first_cpu.brand().to_string(),
        vendor: first_cpu.vendor_id().to_string(),
        physical_cores: System::physical_core_count(),
        logical_cores: cpus.len(),
        frequency_mhz: first_cpu.frequency(),
        global_usage_percent: sys.global_cpu_usage(),
        per_core_usage_percent,
        load_average: LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        },
    })
}

pub fn get_fallback() -> CpuSample {
    CpuSample {
        model: "Unknown".to_string(),
        vendor: "Unknown".to_string(),
        physical_cores: None,
        logical_cores: 0,
        frequency_mhz: 0,
        global_usage_percent: 0.0,
        per_core_usage_percent: vec![],
        load_average: LoadAverage {
            one: 0.0,
            five: 0.0,
            fifteen: 0.0,
        },
    }
}

use crate::core::system_info::types::SystemSnapshot;
use crate::core::system_info::{battery, cpu, disk, host, memory, network};
use crate::error::Result;
use log::warn;
use std::time::Duration;

/// Collect one snapshot of every metric family.
///
/// A failing provider is degraded to its fallback value and logged, so one
/// broken probe never takes down the whole overview.
pub fn collect_snapshot(cpu_interval: Duration) -> Result<SystemSnapshot> {
    let cpu_sample = cpu::collect(cpu_interval).unwrap_or_else(|e| {
        warn!("Failed to sample CPU: {}", e);
        cpu::get_fallback()
    });

    let memory_sample = memory::collect().unwrap_or_else(|e| {
        warn!("Failed to sample memory: {}", e);
        memory::get_fallback()
    });

    let disk_samples = disk::collect().unwrap_or_else(|e| {
        warn!("Failed to sample disks: {}", e);
        disk::get_fallback()
    });

    let network_samples = network::collect().unwrap_or_else(|e| {
        warn!("Failed to sample network interfaces: {}", e);
        network::get_fallback()
    });

    let host_sample = host::collect().unwrap_or_else(|e| {
        warn!("Failed to sample host info: {}", e);
        host::get_fallback()
    });

    // `Ok(None)` means no battery, which is a normal answer on desktops.
    // Probe errors are also degraded to None here.
    let battery_sample = battery::collect().unwrap_or_else(|e| {
        warn!("Failed to probe battery: {}", e);
        None
    });

    Ok(SystemSnapshot {
        cpu: cpu_sample,
        memory: memory_sample,
        disks: disk_samples,
        network: network_samples,
        host: host_sample,
        battery: battery_sample,
    })
}

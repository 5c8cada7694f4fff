use crate::core::system_info::types::DiskSample;
use crate::error::Result;
use sysinfo::Disks;

/// Enumerate mounted filesystems. A host with no visible mounts yields an
/// empty list, which the presenter reports as such rather than erroring.
pub fn collect() -> Result<Vec<DiskSample>> {
    let disks = Disks::new_with_refreshed_list();
    let mut samples = Vec::new();

    for disk in disks.list() {
        let total = disk.total_space();
        let available = disk.available_space();
        let used = total.saturating_sub(available);
        let usage_percent = if total > 0 {
            (used as f32 / total as f32) * 100.0
        } else {
            0.0
        };

        samples.push(DiskSample {
            name: disk.name().to_string_lossy().to_string(),
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            file_system: disk.file_system().to_string_lossy().to_string(),
            total_bytes: total,
            used_bytes: used,
            available_bytes: available,
            usage_percent,
        });
    }

    Ok(samples)
}

pub fn get_fallback() -> Vec<DiskSample> {
    vec![]
}

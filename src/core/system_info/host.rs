use crate::core::system_info::types::HostSample;
use crate::error::Result;
use sysinfo::System;

pub fn collect() -> Result<HostSample> {
    Ok(HostSample {
        os_name: System::name().unwrap_or_else(|| "Unknown".to_string()),
        os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
        kernel_version: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        boot_time_epoch_secs: System::boot_time(),
        uptime_secs: System::uptime(),
    })
}

pub fn get_fallback() -> HostSample {
    HostSample {
        os_name: "Unknown".to_string(),
        os_version: "Unknown".to_string(),
        kernel_version: "Unknown".to_string(),
        hostname: "Unknown".to_string(),
        boot_time_epoch_secs: 0,
        uptime_secs: 0,
    }
}

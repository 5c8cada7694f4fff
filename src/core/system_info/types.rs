use serde::{Deserialize, Serialize};

/// One complete snapshot of the host, taken at a single point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub cpu: CpuSample,
    pub memory: MemorySample,
    pub disks: Vec<DiskSample>,
    pub network: Vec<InterfaceSample>,
    pub host: HostSample,
    pub battery: Option<BatterySample>, // Only on laptops
}

/// CPU sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuSample {
    pub model: String,
    pub vendor: String,
    pub physical_cores: Option<usize>, // Not reported on every platform
    pub logical_cores: usize,
    pub frequency_mhz: u64,
    pub global_usage_percent: f32,
    pub per_core_usage_percent: Vec<f32>,
    pub load_average: LoadAverage,
}

/// System load averages over 1, 5 and 15 minutes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Memory and swap sample, all counters in raw bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub usage_percent: f32,
    pub swap_total_bytes: u64,
    pub swap_used_bytes: u64,
    pub swap_usage_percent: f32,
}

/// One mounted filesystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskSample {
    pub name: String,
    pub mount_point: String,
    pub file_system: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub usage_percent: f32,
}

/// Cumulative traffic counters for one network interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceSample {
    pub name: String,
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
    pub packets_received: u64,
    pub packets_transmitted: u64,
    pub errors_received: u64,
    pub errors_transmitted: u64,
}

/// Host identity and uptime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSample {
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: String,
    pub hostname: String,
    pub boot_time_epoch_secs: u64,
    pub uptime_secs: u64,
}

/// Battery sample (laptops only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterySample {
    pub percentage: f32, // 0-100%
    pub state: BatteryState,
    pub time_to_empty_secs: Option<u64>, // Only meaningful while discharging
    pub time_to_full_secs: Option<u64>,  // Only meaningful while charging
    pub vendor: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BatteryState {
    Charging,
    Discharging,
    Empty,
    Full,
    Unknown,
}

impl std::fmt::Display for BatteryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryState::Charging => write!(f, "Charging"),
            BatteryState::Discharging => write!(f, "Discharging"),
            BatteryState::Empty => write!(f, "Empty"),
            BatteryState::Full => write!(f, "Full"),
            BatteryState::Unknown => write!(f, "Unknown"),
        }
    }
}

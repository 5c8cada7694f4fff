use systrack::core::system_info::types::{
    BatterySample, BatteryState, CpuSample, DiskSample, HostSample, InterfaceSample, LoadAverage,
    MemorySample, SystemSnapshot,
};
use systrack::ui::render;

fn fixed_snapshot() -> SystemSnapshot {
    SystemSnapshot {
        cpu: CpuSample {
            model: "Example CPU".to_string(),
            vendor: "ExampleVendor".to_string(),
            physical_cores: Some(4),
            logical_cores: 8,
            frequency_mhz: 3200,
            global_usage_percent: 37.5,
            per_core_usage_percent: vec![10.0, 95.0, 60.0, 5.0, 30.0, 30.0, 30.0, 40.0],
            load_average: LoadAverage {
                one: 1.23,
                five: 0.98,
                fifteen: 0.75,
            },
        },
        memory: MemorySample {
            total_bytes: 32 * 1_073_741_824,
            used_bytes: 24 * 1_073_741_824,
            available_bytes: 8 * 1_073_741_824,
            usage_percent: 75.0,
            swap_total_bytes: 4 * 1_073_741_824,
            swap_used_bytes: 1_073_741_824,
            swap_usage_percent: 25.0,
        },
        disks: vec![DiskSample {
            name: "nvme0n1p2".to_string(),
            mount_point: "/".to_string(),
            file_system: "ext4".to_string(),
            total_bytes: 512 * 1_073_741_824,
            used_bytes: 256 * 1_073_741_824,
            available_bytes: 256 * 1_073_741_824,
            usage_percent: 50.0,
        }],
        network: vec![InterfaceSample {
            name: "wlan0".to_string(),
            received_bytes: 100 * 1_048_576,
            transmitted_bytes: 50 * 1_048_576,
            packets_received: 123_456,
            packets_transmitted: 98_765,
            errors_received: 0,
            errors_transmitted: 0,
        }],
        host: HostSample {
            os_name: "ExampleOS".to_string(),
            os_version: "22.04".to_string(),
            kernel_version: "6.1.0".to_string(),
            hostname: "workstation".to_string(),
            boot_time_epoch_secs: 1_700_000_000,
            uptime_secs: 7384,
        },
        battery: Some(BatterySample {
            percentage: 88.0,
            state: BatteryState::Charging,
            time_to_empty_secs: None,
            time_to_full_secs: Some(1800),
            vendor: Some("ACME".to_string()),
            model: Some("BAT-1".to_string()),
        }),
    }
}

fn render_plain(snapshot: &SystemSnapshot) -> String {
    colored::control::set_override(false);
    let mut buf = Vec::new();
    render::render_overview(&mut buf, snapshot).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_overview_contains_every_section() {
    let out = render_plain(&fixed_snapshot());

    for section in [
        "SYSTEM OVERVIEW",
        "CPU",
        "Memory",
        "Disks",
        "Network",
        "Uptime",
        "Battery",
    ] {
        assert!(out.contains(section), "missing section {}", section);
    }
}

#[test]
fn test_overview_renders_fixed_precision_values() {
    let out = render_plain(&fixed_snapshot());

    // Memory and disks in GB, network in MB, all two decimals.
    assert!(out.contains("32.00"), "{}", out);
    assert!(out.contains("512.00"), "{}", out);
    assert!(out.contains("100.00"), "{}", out);
    assert!(out.contains("Uptime: 2h 3m 4s"), "{}", out);
    assert!(out.contains("Time to Full: 0h 30m"), "{}", out);
}

#[test]
fn test_table_rows_align_in_overview() {
    let out = render_plain(&fixed_snapshot());

    // Every row of the disk table block shares one separator column.
    let disk_block: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.starts_with("Disks"))
        .skip(2)
        .take_while(|l| !l.is_empty())
        .collect();
    assert!(disk_block.len() >= 3, "{:?}", disk_block);
    assert!(disk_block.iter().any(|l| l.contains('┼')));

    let rows: Vec<&str> = disk_block
        .iter()
        .filter(|l| l.contains('│'))
        .copied()
        .collect();
    assert!(rows.len() >= 2);
    let sep_positions: Vec<usize> = rows.iter().map(|l| l.find('│').unwrap()).collect();
    assert!(
        sep_positions.windows(2).all(|w| w[0] == w[1]),
        "{:?}",
        disk_block
    );
}

#[test]
fn test_snapshot_serializes_for_json_output() {
    let snapshot = fixed_snapshot();
    let json = serde_json::to_string_pretty(&snapshot).unwrap();

    assert!(json.contains("\"logical_cores\": 8"));
    assert!(json.contains("\"mount_point\": \"/\""));

    let back: SystemSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.host.uptime_secs, 7384);
    assert_eq!(back.battery.unwrap().state, BatteryState::Charging);
}

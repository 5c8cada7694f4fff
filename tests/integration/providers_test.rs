use std::time::Duration;
use systrack::core::system_info::{battery, collector, cpu, disk, host, memory, network};
use systrack::core::units::format_duration;

// These run against the live host, so they assert structure rather than
// specific values.

#[test]
fn test_cpu_sample_shape() {
    let sample = cpu::collect(Duration::from_millis(200)).unwrap();

    assert_eq!(sample.logical_cores, sample.per_core_usage_percent.len());
    for usage in &sample.per_core_usage_percent {
        assert!(usage.is_finite() && *usage >= 0.0);
    }
    assert!(sample.global_usage_percent.is_finite());
}

#[test]
fn test_memory_sample_shape() {
    let sample = memory::collect().unwrap();

    assert!(sample.total_bytes > 0);
    assert!(sample.used_bytes <= sample.total_bytes);
    assert!(sample.usage_percent >= 0.0);
}

#[test]
fn test_disk_samples_are_consistent() {
    let samples = disk::collect().unwrap();

    for disk in &samples {
        assert!(disk.used_bytes <= disk.total_bytes, "{}", disk.name);
        assert!(disk.usage_percent >= 0.0 && disk.usage_percent <= 100.0);
    }
}

#[test]
fn test_network_samples_sorted_by_name() {
    let samples = network::collect().unwrap();

    assert!(samples.windows(2).all(|w| w[0].name <= w[1].name));
}

#[test]
fn test_host_uptime_feeds_the_duration_formatter() {
    let sample = host::collect().unwrap();

    assert!(format_duration(sample.uptime_secs as f64).is_ok());
}

#[test]
fn test_battery_probe_does_not_panic() {
    // Hosts without a battery return Ok(None); containers may error.
    let _result = battery::collect();
}

#[test]
fn test_snapshot_survives_any_host() {
    let snapshot = collector::collect_snapshot(Duration::from_millis(200)).unwrap();

    assert_eq!(
        snapshot.cpu.logical_cores,
        snapshot.cpu.per_core_usage_percent.len()
    );
    assert!(snapshot.memory.used_bytes <= snapshot.memory.total_bytes);
}

use crate::core::speedtest::SpeedTestReport;
use crate::core::system_info::types::{
    BatterySample, BatteryState, CpuSample, DiskSample, HostSample, InterfaceSample,
    MemorySample, SystemSnapshot,
};
use crate::core::units::{
    classify, format_duration, format_time_remaining, scale_bytes, SeverityBand, Unit,
};
use crate::error::Result;
use crate::ui::table::{Cell, Table, Tone};
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Render every section of a full snapshot.
pub fn render_overview(w: &mut impl Write, snapshot: &SystemSnapshot) -> Result<()> {
    writeln!(w, "\n{}", "SYSTEM OVERVIEW".bold().bright_cyan())?;
    writeln!(w, "{}", "=".repeat(80))?;

    render_cpu(w, &snapshot.cpu)?;
    render_memory(w, &snapshot.memory)?;
    render_disks(w, &snapshot.disks)?;
    render_network(w, &snapshot.network)?;
    render_uptime(w, &snapshot.host)?;
    render_battery(w, snapshot.battery.as_ref())?;
    writeln!(w)?;

    Ok(())
}

pub fn render_cpu(w: &mut impl Write, cpu: &CpuSample) -> Result<()> {
    section_header(w, "CPU")?;

    writeln!(w, "  Model: {}", cpu.model)?;
    writeln!(w, "  Vendor: {}", cpu.vendor)?;
    match cpu.physical_cores {
        Some(physical) => writeln!(
            w,
            "  Cores: {} physical, {} logical",
            physical, cpu.logical_cores
        )?,
        None => writeln!(w, "  Cores: {} logical", cpu.logical_cores)?,
    }
    writeln!(w, "  Frequency: {} MHz", cpu.frequency_mhz)?;
    writeln!(
        w,
        "  Load Average: {:.2} (1m), {:.2} (5m), {:.2} (15m)",
        cpu.load_average.one, cpu.load_average.five, cpu.load_average.fifteen
    )?;
    writeln!(w)?;

    let mut table = Table::new(&["Core", "Usage"]);
    for (i, usage) in cpu.per_core_usage_percent.iter().enumerate() {
        table.add_row(vec![Cell::plain(format!("cpu{}", i)), usage_cell(*usage)]);
    }
    table.add_row(vec![
        Cell::plain("all"),
        usage_cell(cpu.global_usage_percent),
    ]);
    table.render(w)
}

pub fn render_memory(w: &mut impl Write, memory: &MemorySample) -> Result<()> {
    section_header(w, "Memory")?;

    let mut table = Table::new(&["", "Total (GB)", "Used (GB)", "Available (GB)", "Usage"]);
    table.add_row(vec![
        Cell::plain("RAM"),
        gb_cell(memory.total_bytes),
        gb_cell(memory.used_bytes),
        gb_cell(memory.available_bytes),
        usage_cell(memory.usage_percent),
    ]);
    table.add_row(vec![
        Cell::plain("Swap"),
        gb_cell(memory.swap_total_bytes),
        gb_cell(memory.swap_used_bytes),
        gb_cell(memory.swap_total_bytes.saturating_sub(memory.swap_used_bytes)),
        usage_cell(memory.swap_usage_percent),
    ]);
    table.render(w)
}

pub fn render_disks(w: &mut impl Write, disks: &[DiskSample]) -> Result<()> {
    section_header(w, "Disks")?;

    if disks.is_empty() {
        writeln!(w, "  {}", "No disks detected".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new(&[
        "Name",
        "Mount",
        "FS",
        "Total (GB)",
        "Used (GB)",
        "Available (GB)",
        "Usage",
    ]);
    for disk in disks {
        table.add_row(vec![
            Cell::plain(&disk.name),
            Cell::plain(&disk.mount_point),
            Cell::plain(&disk.file_system),
            gb_cell(disk.total_bytes),
            gb_cell(disk.used_bytes),
            gb_cell(disk.available_bytes),
            usage_cell(disk.usage_percent),
        ]);
    }
    table.render(w)
}

pub fn render_network(w: &mut impl Write, interfaces: &[InterfaceSample]) -> Result<()> {
    section_header(w, "Network")?;

    if interfaces.is_empty() {
        writeln!(w, "  {}", "No network interfaces detected".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new(&[
        "Interface",
        "RX (MB)",
        "TX (MB)",
        "RX packets",
        "TX packets",
        "RX errors",
        "TX errors",
    ]);
    for iface in interfaces {
        table.add_row(vec![
            Cell::plain(&iface.name),
            mb_cell(iface.received_bytes),
            mb_cell(iface.transmitted_bytes),
            Cell::plain(iface.packets_received.to_string()),
            Cell::plain(iface.packets_transmitted.to_string()),
            error_cell(iface.errors_received),
            error_cell(iface.errors_transmitted),
        ]);
    }
    table.render(w)
}

pub fn render_uptime(w: &mut impl Write, host: &HostSample) -> Result<()> {
    section_header(w, "Uptime")?;

    writeln!(w, "  Hostname: {}", host.hostname)?;
    writeln!(w, "  OS: {} {}", host.os_name, host.os_version)?;
    writeln!(w, "  Kernel: {}", host.kernel_version)?;
    writeln!(w, "  Booted: {}", format_boot_time(host.boot_time_epoch_secs))?;

    let up = format_duration(host.uptime_secs as f64)?;
    writeln!(w, "  Uptime: {}", up.to_string().cyan())?;

    Ok(())
}

pub fn render_battery(w: &mut impl Write, battery: Option<&BatterySample>) -> Result<()> {
    section_header(w, "Battery")?;

    let bat = match battery {
        Some(bat) => bat,
        None => {
            writeln!(w, "  {}", "No battery detected".dimmed())?;
            return Ok(());
        }
    };

    let state_str = match bat.state {
        BatteryState::Charging | BatteryState::Full => bat.state.to_string().green(),
        BatteryState::Discharging => bat.state.to_string().yellow(),
        BatteryState::Empty => bat.state.to_string().red(),
        BatteryState::Unknown => bat.state.to_string().normal(),
    };
    writeln!(w, "  Status: {}", state_str)?;

    // Charge bands run the other way around from usage: low is the bad end.
    let charge = format!("{:.0}%", bat.percentage);
    let charge_str = if bat.percentage >= 80.0 {
        charge.green()
    } else if bat.percentage >= 20.0 {
        charge.yellow()
    } else {
        charge.red()
    };
    writeln!(w, "  Charge: {}", charge_str)?;

    match bat.state {
        BatteryState::Discharging => writeln!(
            w,
            "  Time Remaining: {}",
            format_time_remaining(bat.time_to_empty_secs)
        )?,
        BatteryState::Charging => writeln!(
            w,
            "  Time to Full: {}",
            format_time_remaining(bat.time_to_full_secs)
        )?,
        _ => {}
    }

    if let Some(ref vendor) = bat.vendor {
        writeln!(w, "  Vendor: {}", vendor)?;
    }
    if let Some(ref model) = bat.model {
        writeln!(w, "  Model: {}", model)?;
    }

    Ok(())
}

pub fn render_speedtest(w: &mut impl Write, report: &SpeedTestReport) -> Result<()> {
    section_header(w, "Speed Test")?;

    writeln!(
        w,
        "  Downloaded: {:.2} MB",
        scale_bytes(report.bytes_downloaded, Unit::MB)
    )?;
    writeln!(w, "  Elapsed: {:.2} s", report.elapsed_secs)?;
    writeln!(
        w,
        "  Throughput: {} Mbps",
        format!("{:.2}", report.mbps).green().bold()
    )?;

    Ok(())
}

/// Write a sample as pretty-printed JSON, the `--json` mode of every
/// metric command.
pub fn render_json<T: Serialize>(w: &mut impl Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(w, "{}", json)?;
    Ok(())
}

fn section_header(w: &mut impl Write, title: &str) -> Result<()> {
    writeln!(w, "\n{}", title.bold().green())?;
    writeln!(w, "{}", "-".repeat(title.len()))?;
    Ok(())
}

fn severity_tone(percent: f64) -> Tone {
    match classify(percent) {
        SeverityBand::Normal => Tone::Green,
        SeverityBand::Warning => Tone::Yellow,
        SeverityBand::Critical => Tone::Red,
    }
}

fn usage_cell(percent: f32) -> Cell {
    Cell::toned(format!("{:.1}%", percent), severity_tone(percent as f64))
}

fn gb_cell(bytes: u64) -> Cell {
    Cell::plain(format!("{:.2}", scale_bytes(bytes, Unit::GB)))
}

fn mb_cell(bytes: u64) -> Cell {
    Cell::plain(format!("{:.2}", scale_bytes(bytes, Unit::MB)))
}

fn error_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::toned(count.to_string(), Tone::Red)
    } else {
        Cell::plain(count.to_string())
    }
}

fn format_boot_time(epoch_secs: u64) -> String {
    match DateTime::from_timestamp(epoch_secs as i64, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "Unknown".to_string(),
    }
}

use crate::core::system_info::types::{BatterySample, BatteryState};
use crate::error::Result;
use battery::units::ratio::percent;
use battery::units::time::second;
use battery::Manager;

/// Probe for a battery. Desktops without one get `Ok(None)`, which the
/// caller treats as a normal answer rather than a failure.
pub fn collect() -> Result<Option<BatterySample>> {
    let manager = Manager::new()?;
    let mut batteries = manager.batteries()?;

    let bat = match batteries.next() {
        Some(bat) => bat?,
        None => return Ok(None),
    };

    let state = match bat.state() {
        battery::State::Charging => BatteryState::Charging,
        battery::State::Discharging => BatteryState::Discharging,
        battery::State::Empty => BatteryState::Empty,
        battery::State::Full => BatteryState::Full,
        _ => BatteryState::Unknown,
    };

    Ok(Some(BatterySample {
        percentage: bat.state_of_charge().get::<percent>(),
        state,
        time_to_empty_secs: bat.time_to_empty().map(|t| t.get::<second>() as u64),
        time_to_full_secs: bat.time_to_full().map(|t| t.get::<second>() as u64),
        vendor: bat.vendor().map(|v| v.to_string()),
        model: bat.model().map(|m| m.to_string()),
    }))
}

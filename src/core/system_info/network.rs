use crate::core::system_info::types::InterfaceSample;
use crate::error::Result;
use sysinfo::Networks;

/// Read cumulative traffic counters for every network interface.
///
/// Counters are totals since the interface came up, not rates. Interfaces
/// are sorted by name so repeated runs list them in a stable order.
pub fn collect() -> Result<Vec<InterfaceSample>> {
    let networks = Networks::new_with_refreshed_list();
    let mut samples: Vec<InterfaceSample> = networks
        .iter()
        .map(|(name, data)| InterfaceSample {
            name: name.clone(),
            received_bytes: data.total_received(),
            transmitted_bytes: data.total_transmitted(),
            packets_received: data.total_packets_received(),
            packets_transmitted: data.total_packets_transmitted(),
            errors_received: data.total_errors_on_received(),
            errors_transmitted: data.total_errors_on_transmitted(),
        })
        .collect();

    samples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(samples)
}

pub fn get_fallback() -> Vec<InterfaceSample> {
    vec![]
}

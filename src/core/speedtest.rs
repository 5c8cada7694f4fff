use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default download size for a test run, 10 MB.
pub const DEFAULT_TEST_BYTES: u64 = 10_000_000;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TEST_URL: &str = "https://speed.cloudflare.com/__down";

/// Errors from the bandwidth probe. Kept separate from the application error
/// type so callers see exactly which network failure occurred.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Result of one download measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedTestReport {
    pub bytes_downloaded: u64,
    pub elapsed_secs: f64,
    pub mbps: f64,
}

/// Download `bytes` from a public test endpoint and time it.
///
/// This is a single-stream measurement, so treat the number as a floor on
/// the link speed rather than an exact figure.
pub fn run(bytes: u64, timeout: Duration) -> Result<SpeedTestReport, NetworkError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("systrack")
        .timeout(timeout)
        .build()?;

    let started = Instant::now();
    let response = client
        .get(TEST_URL)
        .query(&[("bytes", bytes.to_string())])
        .send()?;

    if !response.status().is_success() {
        return Err(NetworkError::Status(response.status()));
    }

    let body = response.bytes()?;
    let elapsed_secs = started.elapsed().as_secs_f64();

    Ok(SpeedTestReport {
        bytes_downloaded: body.len() as u64,
        elapsed_secs,
        mbps: throughput_mbps(body.len() as u64, elapsed_secs),
    })
}

fn throughput_mbps(bytes: u64, secs: f64) -> f64 {
    if secs > 0.0 {
        (bytes as f64 * 8.0) / 1_000_000.0 / secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_ten_megabytes_in_eight_seconds() {
        // 10 MB = 80 Mbit, over 8 s that is 10 Mbps.
        assert_eq!(throughput_mbps(10_000_000, 8.0), 10.0);
    }

    #[test]
    fn test_throughput_zero_elapsed_is_zero() {
        assert_eq!(throughput_mbps(10_000_000, 0.0), 0.0);
    }
}

use systrack::core::units::{
    classify, format_duration, format_time_remaining, scale_bytes, SeverityBand, Unit,
};
use systrack::SysTrackError;

#[test]
fn test_duration_breakdown_via_public_api() {
    let d = format_duration(7384.0).unwrap();
    assert_eq!((d.hours, d.minutes, d.seconds), (2, 3, 4));
    assert_eq!(d.to_string(), "2h 3m 4s");
}

#[test]
fn test_duration_reconstruction_over_a_day_of_inputs() {
    // Sweep at an odd stride so minute and hour boundaries both get hit.
    let mut s = 0.0_f64;
    while s < 90_000.0 {
        let d = format_duration(s).unwrap();
        let rebuilt = (d.hours * 3600 + d.minutes * 60 + d.seconds) as f64;
        assert!(rebuilt <= s && s < rebuilt + 1.0, "failed at {}", s);
        assert!(d.minutes <= 59 && d.seconds <= 59, "failed at {}", s);
        s += 61.7;
    }
}

#[test]
fn test_invalid_duration_inputs_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(format_duration(bad), Err(SysTrackError::InvalidInput(_))),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_byte_scaling_fixed_units() {
    assert_eq!(scale_bytes(1_073_741_824, Unit::GB), 1.0);
    assert_eq!(scale_bytes(1_048_576, Unit::MB), 1.0);
    assert_eq!(scale_bytes(1024, Unit::KB), 1.0);
    assert_eq!(scale_bytes(7, Unit::B), 7.0);
}

#[test]
fn test_severity_band_boundaries() {
    assert_eq!(classify(50.0), SeverityBand::Normal);
    assert_eq!(classify(50.0001), SeverityBand::Warning);
    assert_eq!(classify(80.0), SeverityBand::Warning);
    assert_eq!(classify(80.0001), SeverityBand::Critical);
}

#[test]
fn test_time_remaining_sentinel_and_coarseness() {
    assert_eq!(format_time_remaining(None), "Unknown");
    assert_eq!(format_time_remaining(Some(3661)), "1h 1m");
}

//! Environment overrides for the settings file
//!
//! Kept in its own test binary with a single test: it mutates the process
//! environment.

use pqc_harness::config::{load_settings, ENV_PREFIX};
use pqc_harness::SignatureTiming;
use std::io::Write;

#[test]
fn test_environment_overrides_file_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"precision = 6\nshow_details = false\n").unwrap();

    let precision_var = format!("{}_PRECISION", ENV_PREFIX);
    let timing_var = format!("{}_SIGNATURE_TIMING", ENV_PREFIX);
    std::env::set_var(&precision_var, "2");
    std::env::set_var(&timing_var, "include-verification");

    let result = load_settings(Some(file.path()));

    std::env::remove_var(&precision_var);
    std::env::remove_var(&timing_var);

    let settings = result.unwrap();
    assert_eq!(settings.precision, 2);
    assert_eq!(settings.signature_timing, SignatureTiming::IncludeVerification);
    // Untouched by the environment
    assert!(!settings.show_details);
}

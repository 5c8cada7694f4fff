use crate::core::speedtest;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let bytes = matches
        .get_one::<u64>("bytes")
        .copied()
        .unwrap_or(speedtest::DEFAULT_TEST_BYTES);
    let timeout_secs = matches
        .get_one::<u64>("timeout-secs")
        .copied()
        .unwrap_or(speedtest::DEFAULT_TIMEOUT_SECS);
    let json = matches.get_flag("json");

    let mut stdout = io::stdout().lock();
    if !json {
        writeln!(stdout, "{}", "Running download test...".cyan())?;
    }

    let report = speedtest::run(bytes, Duration::from_secs(timeout_secs))?;

    if json {
        render::render_json(&mut stdout, &report)?;
    } else {
        render::render_speedtest(&mut stdout, &report)?;
    }

    Ok(())
}

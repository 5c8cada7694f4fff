use crate::core::system_info::cpu;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use std::io;
use std::time::Duration;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let interval_ms = matches.get_one::<u64>("interval").copied().unwrap_or(1000);
    let sample = cpu::collect(Duration::from_millis(interval_ms))?;

    let mut stdout = io::stdout().lock();
    if matches.get_flag("json") {
        render::render_json(&mut stdout, &sample)?;
    } else {
        render::render_cpu(&mut stdout, &sample)?;
    }

    Ok(())
}

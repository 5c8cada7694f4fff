use crate::core::system_info::battery;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use std::io;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    // None is not an error: it means the host simply has no battery.
    let sample = battery::collect()?;

    let mut stdout = io::stdout().lock();
    if matches.get_flag("json") {
        render::render_json(&mut stdout, &sample)?;
    } else {
        render::render_battery(&mut stdout, sample.as_ref())?;
    }

    Ok(())
}

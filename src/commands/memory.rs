use crate::core::system_info::memory;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use std::io;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let sample = memory::collect()?;

    let mut stdout = io::stdout().lock();
    if matches.get_flag("json") {
        render::render_json(&mut stdout, &sample)?;
    } else {
        render::render_memory(&mut stdout, &sample)?;
    }

    Ok(())
}

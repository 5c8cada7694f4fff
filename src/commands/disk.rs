use crate::core::system_info::disk;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use std::io;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let samples = disk::collect()?;

    let mut stdout = io::stdout().lock();
    if matches.get_flag("json") {
        render::render_json(&mut stdout, &samples)?;
    } else {
        render::render_disks(&mut stdout, &samples)?;
    }

    Ok(())
}

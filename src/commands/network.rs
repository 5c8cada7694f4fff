use crate::core::system_info::network;
use crate::ui::render;
use anyhow::Result;
use clap::ArgMatches;
use std::io;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let samples = network::collect()?;

    let mut stdout = io::stdout().lock();
    if matches.get_flag("json") {
        render::render_json(&mut stdout, &samples)?;
    } else {
        render::render_network(&mut stdout, &samples)?;
    }

    Ok(())
}

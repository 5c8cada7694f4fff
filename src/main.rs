use anyhow::Result;
use clap::{Arg, Command};
use std::io::{self, Write};

// Use modules from the library
use systrack::commands;

fn build_cli() -> Command {
    Command::new("systrack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Samples live host metrics and renders them as console tables")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(Command::new("welcome").about("Show the welcome message"))
        .subcommand(
            Command::new("cpu")
                .about("Show per-core and aggregate CPU usage")
                .arg(interval_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("memory")
                .about("Show memory and swap usage")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("disk")
                .about("Show usage per mounted filesystem")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("network")
                .about("Show traffic counters per network interface")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("uptime")
                .about("Show host identity, boot time and uptime")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("battery")
                .about("Show battery charge and time estimates")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("all")
                .about("Show a full system overview")
                .arg(interval_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("speedtest")
                .about("Measure download bandwidth against a public endpoint")
                .arg(
                    Arg::new("bytes")
                        .long("bytes")
                        .value_name("BYTES")
                        .help("Download size in bytes")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10000000"),
                )
                .arg(
                    Arg::new("timeout-secs")
                        .long("timeout-secs")
                        .value_name("SECS")
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("30"),
                )
                .arg(json_flag()),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
}

fn interval_arg() -> Arg {
    Arg::new("interval")
        .short('i')
        .long("interval")
        .value_name("MS")
        .help("CPU sampling interval in milliseconds")
        .value_parser(clap::value_parser!(u64))
        .default_value("1000")
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the raw sample as JSON instead of a table")
        .action(clap::ArgAction::SetTrue)
}

fn main() -> Result<()> {
    systrack::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("systrack version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("welcome", _)) => commands::welcome::execute(&mut io::stdout().lock())?,
        Some(("cpu", sub_matches)) => commands::cpu::execute(sub_matches)?,
        Some(("memory", sub_matches)) => commands::memory::execute(sub_matches)?,
        Some(("disk", sub_matches)) => commands::disk::execute(sub_matches)?,
        Some(("network", sub_matches)) => commands::network::execute(sub_matches)?,
        Some(("uptime", sub_matches)) => commands::uptime::execute(sub_matches)?,
        Some(("battery", sub_matches)) => commands::battery::execute(sub_matches)?,
        Some(("all", sub_matches)) => commands::all::execute(sub_matches)?,
        Some(("speedtest", sub_matches)) => commands::speedtest::execute(sub_matches)?,
        Some(("version", _)) => commands::version::execute()?,
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        _ => {
            let mut stdout = io::stdout().lock();
            commands::welcome::execute(&mut stdout)?;
            writeln!(stdout, "Use 'systrack --help' for more information.")?;
        }
    }

    Ok(())
}

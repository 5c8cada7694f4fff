use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell_str = matches
        .get_one::<String>("shell")
        .ok_or_else(|| anyhow!("shell argument is required"))?;

    let shell = shell_str.to_lowercase().parse::<Shell>().map_err(|_| {
        anyhow!(
            "unsupported shell '{}', expected one of: bash, zsh, fish, powershell, elvish",
            shell_str
        )
    })?;

    generate(shell, cli, "systrack", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shells_parse() {
        for name in ["bash", "zsh", "fish", "powershell", "elvish"] {
            assert!(name.parse::<Shell>().is_ok(), "{} should parse", name);
        }
    }

    #[test]
    fn test_unknown_shell_is_rejected() {
        assert!("tcsh".parse::<Shell>().is_err());
    }
}

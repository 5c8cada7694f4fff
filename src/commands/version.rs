use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("systrack version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

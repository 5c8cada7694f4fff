use anyhow::Result;
use std::io::Write;

pub fn execute(w: &mut impl Write) -> Result<()> {
    writeln!(w, "Welcome to SysTrack! Your system stats monitor.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_greeting_text() {
        let mut buf = Vec::new();
        execute(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Welcome to SysTrack! Your system stats monitor.\n"
        );
    }
}

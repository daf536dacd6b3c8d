//! Password acquisition.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Environment variable consulted before prompting.
pub const PASSWORD_ENV: &str = "BC_PASSWORD";

/// Use `from_env` when present, otherwise prompt on `prompt` and read one
/// line from `input`. The trailing line break is stripped; other
/// whitespace is part of the password.
pub fn resolve_password<R, W>(from_env: Option<String>, input: &mut R, prompt: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if let Some(password) = from_env {
        if password.is_empty() {
            bail!("{PASSWORD_ENV} is set but empty");
        }
        return Ok(password);
    }

    write!(prompt, "Password: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let password = line.trim_end_matches(['\n', '\r']);
    if password.is_empty() {
        bail!("no password given");
    }
    Ok(password.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_env_value_wins_without_prompting() {
        let mut input = Cursor::new("ignored\n");
        let mut prompt = Vec::new();

        let password = resolve_password(Some("from-env".into()), &mut input, &mut prompt).unwrap();

        assert_eq!(password, "from-env");
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_reads_one_line_from_input() {
        let mut input = Cursor::new(" spaced pw \r\nsecond line\n");
        let mut prompt = Vec::new();

        let password = resolve_password(None, &mut input, &mut prompt).unwrap();

        assert_eq!(password, " spaced pw ");
        assert_eq!(prompt, b"Password: ");
    }

    #[test]
    fn test_empty_password_rejected() {
        let mut prompt = Vec::new();
        assert!(resolve_password(None, &mut Cursor::new("\n"), &mut prompt).is_err());
        assert!(resolve_password(None, &mut Cursor::new(""), &mut prompt).is_err());
        assert!(resolve_password(Some(String::new()), &mut Cursor::new(""), &mut prompt).is_err());
    }
}

use anyhow::Context as _;
use secrecy::SecretString;
use std::io::{BufRead as _, Write as _};

/// Reads one line from stdin after showing `label` on stderr. The input is
/// echoed, pass secrets on the command line to avoid typing them
pub fn secret(label: &str) -> anyhow::Result<SecretString> {
    line(label).map(SecretString::from)
}

pub fn line(label: &str) -> anyhow::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{label}: ").context("failed to write prompt")?;
    stderr.flush().context("failed to flush prompt")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Uses `supplied` when given, otherwise prompts
pub fn secret_or_prompt(supplied: Option<String>, label: &str) -> anyhow::Result<SecretString> {
    match supplied {
        Some(value) => Ok(value.into()),
        None => secret(label),
    }
}

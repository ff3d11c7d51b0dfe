use anyhow::{Context, Result};
use shellkit_core::ports::Prompt;
use std::io::{self, BufRead, Write};

/// Prompt on stderr, answer from stdin.
///
/// stderr keeps the prompt visible when stdout is captured by `$(...)`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&self, message: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}", message).context("Failed to write prompt")?;
        stderr.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

use anyhow::{Context, Result};
use shellkit_core::ports::Selector;
use shellkit_core::CoreError;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Exit codes fzf-style finders use for "nothing matched" and "cancelled"
const NO_MATCH: i32 = 1;
const INTERRUPTED: i32 = 130;

/// Selector backed by an external fuzzy finder (fzf, sk, peco...)
///
/// Candidates go to the finder's stdin one per line; the chosen line comes
/// back on its stdout. The finder draws its UI on the terminal itself.
pub struct FuzzyFinder {
    program: String,
}

impl FuzzyFinder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Selector for FuzzyFinder {
    fn select(&self, candidates: &[String]) -> Result<Option<String>> {
        if candidates.is_empty() {
            return Ok(None);
        }
        debug!("offering {} candidates to {}", candidates.len(), self.program);

        let program = which::which(&self.program)
            .with_context(|| format!("Fuzzy selector '{}' not found on PATH", self.program))?;
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program))?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = candidates.join("\n");
            // The finder may exit before reading everything; that is not an error
            let _ = stdin.write_all(input.as_bytes());
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.program))?;

        match output.status.code() {
            Some(0) => {
                let chosen = String::from_utf8_lossy(&output.stdout)
                    .trim_end_matches(['\r', '\n'])
                    .to_string();
                Ok((!chosen.is_empty()).then_some(chosen))
            }
            Some(NO_MATCH) | Some(INTERRUPTED) => Ok(None),
            code => Err(CoreError::ToolFailed {
                tool: self.program.clone(),
                code,
                detail: String::new(),
            }
            .into()),
        }
    }
}

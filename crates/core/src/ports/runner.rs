use crate::domain::Invocation;
use anyhow::Result;

/// What a finished child process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty when stdout was inherited)
    pub stdout: String,
    /// Captured stderr (empty when stderr was inherited)
    pub stderr: String,
}

impl ProcessOutput {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn with_stdout(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Captured stderr without surrounding whitespace
    pub fn diagnostic(&self) -> String {
        self.stderr.trim().to_string()
    }
}

/// Port for running external programs
///
/// Every call blocks until the child exits, except [`CommandRunner::launch`].
/// A program that cannot be started is an `Err`; a program that ran and
/// exited non-zero is an `Ok` whose output says so.
pub trait CommandRunner {
    /// Run with stdout and stderr captured
    fn capture(&self, invocation: &Invocation) -> Result<ProcessOutput>;

    /// Run attached to the terminal
    fn interactive(&self, invocation: &Invocation) -> Result<ProcessOutput>;

    /// Run with `input` on stdin and stdout/stderr attached to the terminal
    fn feed(&self, invocation: &Invocation, input: &[u8]) -> Result<ProcessOutput>;

    /// Start without waiting for the child
    fn launch(&self, invocation: &Invocation) -> Result<()>;
}

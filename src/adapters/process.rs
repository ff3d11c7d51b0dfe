use anyhow::{Context, Result};
use shellkit_core::ports::{CommandRunner, ProcessOutput};
use shellkit_core::Invocation;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs invocations as real child processes
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    /// Build a `Command`, resolving the program through `PATH` (and
    /// `PATHEXT` on Windows, so `.cmd` shims are found). Unresolvable
    /// programs are passed through and fail at spawn with the OS error.
    fn command(&self, invocation: &Invocation) -> Command {
        let program = which::which(&invocation.program)
            .unwrap_or_else(|_| PathBuf::from(&invocation.program));
        let mut command = Command::new(program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

fn finished(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> ProcessOutput {
    ProcessOutput {
        code: status.code(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!("capture: {}", invocation);
        let output = self
            .command(invocation)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", invocation.program))?;
        Ok(finished(output.status, output.stdout, output.stderr))
    }

    fn interactive(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!("interactive: {}", invocation);
        let status = self
            .command(invocation)
            .status()
            .with_context(|| format!("Failed to run {}", invocation.program))?;
        Ok(finished(status, Vec::new(), Vec::new()))
    }

    fn feed(&self, invocation: &Invocation, input: &[u8]) -> Result<ProcessOutput> {
        debug!("feed ({} bytes): {}", input.len(), invocation);
        let mut child = self
            .command(invocation)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run {}", invocation.program))?;

        // Dropping stdin closes the pipe so the child sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input)
                .with_context(|| format!("Failed to write to {}", invocation.program))?;
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {}", invocation.program))?;
        Ok(finished(status, Vec::new(), Vec::new()))
    }

    fn launch(&self, invocation: &Invocation) -> Result<()> {
        debug!("launch: {}", invocation);
        self.command(invocation)
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch {}", invocation.program))?;
        Ok(())
    }
}

use anyhow::Result;
use shellkit_core::ports::{CommandRunner, ProcessOutput};
use shellkit_core::{CoreError, Invocation};
use tracing::info;

/// Each non-blank line of piped input, trimmed, as one argument
pub fn args_from_input(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run `command` (program plus leading arguments) with the piped lines
/// appended, attached to the terminal.
///
/// A program that cannot be found fails with the OS "not found" error.
pub fn pipe_to_command(runner: &dyn CommandRunner, command: &[String], input: &str) -> Result<ProcessOutput> {
    let (program, leading) = command.split_first().ok_or_else(|| CoreError::EmptyCommand {
        operation: "pipe".to_string(),
    })?;

    let piped = args_from_input(input);
    info!("piping {} argument(s) to {}", piped.len(), program);

    let invocation = Invocation::new(program.as_str())
        .args(leading.iter().cloned())
        .args(piped);
    runner.interactive(&invocation)
}

/// Exit status for our own process that mirrors the child's.
///
/// Codes that do not fit in a byte (negative NTSTATUS values, for one) and
/// death by signal become 1, never 0.
pub fn exit_status(code: Option<i32>) -> u8 {
    match code {
        Some(code) => u8::try_from(code).unwrap_or(1),
        None => 1,
    }
}

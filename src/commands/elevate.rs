use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shellkit_core::ports::CommandRunner;
use shellkit_core::{CoreError, Invocation, Platform};
use tracing::info;

/// Windows PowerShell, present on every Windows install, does the relaunch
const LAUNCHER: &str = "powershell";

/// Join commands into one statement, in order.
pub fn compound_statement(commands: &[String]) -> String {
    commands.join("; ")
}

/// `-EncodedCommand` payload: base64 of the UTF-16LE script.
pub fn encode_command(script: &str) -> String {
    let bytes: Vec<u8> = script.encode_utf16().flat_map(u16::to_le_bytes).collect();
    STANDARD.encode(bytes)
}

/// Invocation that starts `shell` elevated, waits, and exits with its code.
pub fn elevation_invocation(shell: &str, statement: &str) -> Invocation {
    let script = format!(
        "$p = Start-Process -FilePath '{}' -Verb RunAs -Wait -PassThru -ArgumentList '-NoProfile','-EncodedCommand','{}'; exit $p.ExitCode",
        shell.replace('\'', "''"),
        encode_command(statement)
    );
    Invocation::new(LAUNCHER).args(["-NoProfile", "-NonInteractive", "-Command"]).arg(script)
}

/// Run `commands` in an elevated `shell` and wait for it to finish.
///
/// Elevation goes through the Windows UAC prompt; other platforms get an
/// explicit `UnsupportedPlatform` error.
pub fn run_elevated(
    runner: &dyn CommandRunner,
    platform: Platform,
    shell: &str,
    commands: &[String],
) -> Result<()> {
    if commands.is_empty() {
        return Err(CoreError::EmptyCommand {
            operation: "sudo".to_string(),
        }
        .into());
    }
    if platform != Platform::Windows {
        return Err(CoreError::UnsupportedPlatform {
            operation: "Elevated command execution".to_string(),
            platform: platform.to_string(),
        }
        .into());
    }

    let statement = compound_statement(commands);
    info!("elevating {}: {}", shell, statement);

    let output = runner.interactive(&elevation_invocation(shell, &statement))?;
    if !output.success() {
        return Err(CoreError::ToolFailed {
            tool: format!("elevated {}", shell),
            code: output.code,
            detail: output.diagnostic(),
        }
        .into());
    }
    Ok(())
}

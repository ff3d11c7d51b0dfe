use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use shellkit_core::ports::{Clock, CommandRunner};
use shellkit_core::{Invocation, Platform};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A recorded session that has been started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub path: PathBuf,
    /// What was run to record it
    pub invocation: Invocation,
}

pub fn transcript_file_name(now: DateTime<Local>) -> String {
    format!("transcript-{}.log", now.format("%Y%m%d-%H%M%S"))
}

/// Recorder for `path`: `recorder <path>` when configured, otherwise
/// `script -q` on unix and a PowerShell `Start-Transcript` session on
/// Windows.
pub fn recorder_invocation(platform: Platform, recorder: Option<&str>, path: &Path) -> Invocation {
    let path_arg = path.to_string_lossy();
    match (recorder, platform) {
        (Some(recorder), _) => Invocation::new(recorder).arg(path_arg),
        (None, Platform::Unix) => Invocation::new("script").arg("-q").arg(path_arg),
        (None, Platform::Windows) => Invocation::new("pwsh").args(["-NoExit", "-Command"]).arg(format!(
            "Start-Transcript -Path '{}'",
            path_arg.replace('\'', "''")
        )),
    }
}

/// Start recording into a timestamped file under `dir`, creating `dir` if
/// needed. Blocks until the recorded session ends.
///
/// Only a recorder that cannot be started is an error. Its exit status is
/// that of the recorded shell, so a non-zero status is logged and the
/// transcript is still returned.
pub fn start(
    runner: &dyn CommandRunner,
    clock: &dyn Clock,
    platform: Platform,
    recorder: Option<&str>,
    dir: &Path,
) -> Result<Transcript> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(transcript_file_name(clock.now()));
    let invocation = recorder_invocation(platform, recorder, &path);
    info!("recording session to {}", path.display());

    let output = runner.interactive(&invocation)?;
    if !output.success() {
        warn!("{} ended with status {:?}", invocation.program, output.code);
    }

    Ok(Transcript { path, invocation })
}

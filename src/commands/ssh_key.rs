use anyhow::{Context, Result};
use shellkit_core::ports::CommandRunner;
use shellkit_core::{CoreError, Invocation};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runs on the remote host with the key on stdin
pub const REMOTE_SCRIPT: &str = "umask 077; mkdir -p ~/.ssh && chmod 700 ~/.ssh \
&& cat >> ~/.ssh/authorized_keys && chmod 600 ~/.ssh/authorized_keys";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCopyOutcome {
    Copied,
    /// No key file at this path, so nothing was sent
    KeyMissing(PathBuf),
}

pub fn copy_invocation(client: &str, user: &str, host: &str) -> Invocation {
    Invocation::new(client)
        .arg(format!("{}@{}", user, host))
        .arg(REMOTE_SCRIPT)
}

/// Append the public key at `key_path` to `user@host`'s authorized_keys.
pub fn copy_key(
    runner: &dyn CommandRunner,
    client: &str,
    user: &str,
    host: &str,
    key_path: &Path,
) -> Result<KeyCopyOutcome> {
    if !key_path.is_file() {
        warn!("no public key at {}, nothing copied", key_path.display());
        return Ok(KeyCopyOutcome::KeyMissing(key_path.to_path_buf()));
    }

    let key = fs::read(key_path).with_context(|| format!("Failed to read {}", key_path.display()))?;
    info!("copying {} to {}@{}", key_path.display(), user, host);

    let output = runner.feed(&copy_invocation(client, user, host), &key)?;
    if !output.success() {
        return Err(CoreError::ToolFailed {
            tool: client.to_string(),
            code: output.code,
            detail: output.diagnostic(),
        }
        .into());
    }
    Ok(KeyCopyOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallKind, RecordingRunner};
    use shellkit_core::ports::ProcessOutput;
    use tempfile::TempDir;

    #[test]
    fn test_key_bytes_go_to_remote_stdin() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let key = temp_dir.path().join("id_ed25519.pub");
        fs::write(&key, b"ssh-ed25519 AAAAC3Nz me@laptop\n")?;
        let runner = RecordingRunner::new();

        let outcome = copy_key(&runner, "ssh", "deploy", "build01", &key)?;

        assert_eq!(outcome, KeyCopyOutcome::Copied);
        let calls = runner.calls();
        assert_eq!(calls[0].kind, CallKind::Feed);
        assert_eq!(calls[0].invocation.args, vec!["deploy@build01", REMOTE_SCRIPT]);
        assert_eq!(calls[0].input.as_deref(), Some(&b"ssh-ed25519 AAAAC3Nz me@laptop\n"[..]));
        Ok(())
    }

    #[test]
    fn test_missing_key_copies_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let runner = RecordingRunner::new();
        let key = temp_dir.path().join("absent.pub");

        let outcome = copy_key(&runner, "ssh", "deploy", "build01", &key)?;

        assert_eq!(outcome, KeyCopyOutcome::KeyMissing(key));
        assert!(runner.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_remote_failure_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let key = temp_dir.path().join("k.pub");
        fs::write(&key, b"k")?;
        let runner = RecordingRunner::new().respond(ProcessOutput::exited(255));

        let err = copy_key(&runner, "plink", "u", "h", &key).unwrap_err();
        assert!(err.to_string().contains("plink"));
        Ok(())
    }

    #[test]
    fn test_remote_script_protects_permissions() {
        assert!(REMOTE_SCRIPT.contains("chmod 700 ~/.ssh"));
        assert!(REMOTE_SCRIPT.contains(">> ~/.ssh/authorized_keys"));
    }
}

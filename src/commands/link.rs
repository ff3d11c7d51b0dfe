use anyhow::{Context, Result};
use shellkit_core::{CoreError, Session};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use super::rmrf::remove_tree;

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// Create a symbolic link at `destination` pointing to `target`.
///
/// Both paths resolve against the session directory. All checks run before
/// anything on disk changes: the target must exist, and an existing
/// destination (even a dangling link) is only replaced with `force`.
pub fn create_link(session: &Session, destination: &Path, target: &Path, force: bool) -> Result<PathBuf> {
    let target = session.resolve(target);
    let destination = session.resolve(destination);

    if !target.exists() {
        return Err(CoreError::MissingPath {
            path: target.display().to_string(),
        }
        .into());
    }

    if fs::symlink_metadata(&destination).is_ok() {
        if !force {
            return Err(CoreError::AlreadyExists {
                path: destination.display().to_string(),
            }
            .into());
        }
        info!("replacing existing {}", destination.display());
        remove_tree(&destination)
            .with_context(|| format!("Failed to remove existing {}", destination.display()))?;
    }

    symlink(&target, &destination).with_context(|| {
        format!("Failed to link {} -> {}", destination.display(), target.display())
    })?;
    info!("linked {} -> {}", destination.display(), target.display());

    Ok(destination)
}

use anyhow::{Context, Result};
use shellkit_core::Session;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Delete `path` whatever it is: files and links are unlinked (a link to a
/// directory never touches the directory behind it), directories go
/// recursively.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        remove_link(path)
    } else if file_type.is_dir() {
        clear_readonly(path)?;
        fs::remove_dir_all(path)
    } else {
        clear_readonly(path)?;
        fs::remove_file(path)
    }
}

#[cfg(windows)]
fn remove_link(path: &Path) -> io::Result<()> {
    // Directory symlinks and junctions need remove_dir on Windows
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_link(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Read-only entries block deletion on Windows; unix only cares about the
/// parent directory's permissions.
#[cfg(windows)]
fn clear_readonly(path: &Path) -> io::Result<()> {
    for entry in walkdir::WalkDir::new(path).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let metadata = entry.metadata().map_err(io::Error::from)?;
        let mut permissions = metadata.permissions();
        if permissions.readonly() {
            permissions.set_readonly(false);
            fs::set_permissions(entry.path(), permissions)?;
        }
    }
    Ok(())
}

#[cfg(not(windows))]
fn clear_readonly(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Resolve `path` against the session directory and delete it without
/// asking. Missing paths and blocked deletions are errors naming the path.
pub fn force_remove(session: &Session, path: &Path) -> Result<PathBuf> {
    let absolute = session.resolve(path);
    info!("removing {}", absolute.display());

    remove_tree(&absolute).with_context(|| format!("Failed to remove {}", absolute.display()))?;
    Ok(absolute)
}

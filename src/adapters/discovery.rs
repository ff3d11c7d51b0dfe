use anyhow::{Context, Result};
use shellkit_core::RepoMeta;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the directory that marks a repository root
pub const REPO_MARKER: &str = ".git";

/// Find every repository under `base_path`.
///
/// A repository is the parent of a `.git` directory. Walking continues into
/// repositories so nested ones are reported too, but never into `.git`
/// itself. Entries are visited in file-name order so numbering is stable
/// between runs.
pub fn find_repos<P: AsRef<Path>>(base_path: P) -> Result<Vec<RepoMeta>> {
    let base_path = base_path.as_ref();
    if !base_path.is_dir() {
        anyhow::bail!("Not a directory: {}", base_path.display());
    }

    let mut repositories = Vec::new();

    for entry in WalkDir::new(base_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != REPO_MARKER)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable subtrees are skipped rather than failing the scan
            Err(err) if err.depth() > 0 => {
                tracing::debug!("skipping unreadable entry: {}", err);
                continue;
            }
            Err(err) => return Err(err).context("Failed to read directory entry"),
        };

        if entry.file_type().is_dir() && entry.path().join(REPO_MARKER).is_dir() {
            repositories.push(RepoMeta::new(entry.path()));
        }
    }

    Ok(repositories)
}

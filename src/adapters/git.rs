use git2::Repository as GitRepository;
use shellkit_core::RepoMeta;
use std::path::Path;

/// Checked-out branch of the repository at `repo_path`.
///
/// A detached HEAD shows as the short commit hash. Returns `None` when the
/// repository cannot be opened or has no commits yet.
pub fn read_branch<P: AsRef<Path>>(repo_path: P) -> Option<String> {
    let git_repo = GitRepository::open(repo_path.as_ref()).ok()?;
    let head = git_repo.head().ok()?;

    if head.is_branch() {
        head.shorthand().map(|s| s.to_string())
    } else {
        head.target().map(|oid| format!("{:.8}", oid))
    }
}

/// Fill in the branch of every repository, leaving unreadable ones blank.
pub fn annotate_branches(repos: &mut [RepoMeta]) {
    for repo in repos {
        repo.branch = read_branch(&repo.path);
    }
}

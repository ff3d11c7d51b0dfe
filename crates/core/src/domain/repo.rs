use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Repository found during a scan (the parent of a `.git` directory)
#[derive(Debug, Clone, PartialEq)]
pub struct RepoMeta {
    pub path: PathBuf,
    pub branch: Option<String>,
}

impl RepoMeta {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            branch: None,
        }
    }
}

/// Numbered repositories offered to the user, indexed from 1.
///
/// Built fresh on every run and dropped once the choice is consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionList {
    entries: BTreeMap<usize, RepoMeta>,
}

impl SelectionList {
    pub fn from_repos(repos: Vec<RepoMeta>) -> Self {
        let entries = repos
            .into_iter()
            .enumerate()
            .map(|(i, repo)| (i + 1, repo))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RepoMeta> {
        self.entries.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &RepoMeta)> {
        self.entries.iter().map(|(i, repo)| (*i, repo))
    }

    /// Look up a raw answer from the prompt. Anything that is not a recorded
    /// index yields `None`.
    pub fn resolve_answer(&self, answer: &str) -> Option<&RepoMeta> {
        answer.trim().parse::<usize>().ok().and_then(|i| self.get(i))
    }
}

/// Last `segments` normal components of `path`, joined with the platform
/// separator.
///
/// Paths with fewer components give a shorter string (the filesystem root
/// gives an empty one).
pub fn tail_segments(path: &Path, segments: usize) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    let start = parts.len().saturating_sub(segments);
    parts[start..].join(std::path::MAIN_SEPARATOR_STR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(paths: &[&str]) -> SelectionList {
        SelectionList::from_repos(paths.iter().map(|p| RepoMeta::new(*p)).collect())
    }

    #[test]
    fn test_indices_start_at_one() {
        let list = list(&["/src/a", "/src/b", "/src/c"]);
        let indices: Vec<_> = list.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(list.get(2).map(|r| r.path.clone()), Some(PathBuf::from("/src/b")));
        assert!(list.get(0).is_none());
    }

    #[test]
    fn test_resolve_answer() {
        let list = list(&["/src/a", "/src/b"]);
        assert_eq!(list.resolve_answer(" 2\n").map(|r| &r.path), Some(&PathBuf::from("/src/b")));
        assert!(list.resolve_answer("9").is_none());
        assert!(list.resolve_answer("two").is_none());
        assert!(list.resolve_answer("").is_none());
        assert!(list.resolve_answer("-1").is_none());
    }

    #[test]
    fn test_tail_segments() {
        let sep = std::path::MAIN_SEPARATOR_STR;
        let path = Path::new("/home/me/src/project");
        assert_eq!(tail_segments(path, 2), format!("src{sep}project"));
        assert_eq!(tail_segments(Path::new("/project"), 2), "project");
        assert_eq!(tail_segments(Path::new("/"), 2), "");
        assert_eq!(tail_segments(Path::new("rel/a/b"), 5), format!("rel{sep}a{sep}b"));
    }
}

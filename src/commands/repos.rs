use anyhow::Result;
use crossterm::style::Stylize;
use shellkit_core::ports::Prompt;
use shellkit_core::{tail_segments, SelectionList, Session};
use std::path::Path;
use tracing::{debug, info};

use crate::adapters::{discovery, git};

/// How many trailing path segments a truncated listing shows
pub const DISPLAY_SEGMENTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStyle {
    pub truncate: bool,
    pub colored: bool,
}

/// Number every repository under `root`, optionally reading its branch.
pub fn discover(root: &Path, with_branch: bool) -> Result<SelectionList> {
    let mut repos = discovery::find_repos(root)?;
    if with_branch {
        git::annotate_branches(&mut repos);
    }
    info!("found {} repositories under {}", repos.len(), root.display());
    Ok(SelectionList::from_repos(repos))
}

/// One `index  path [branch]` line per repository.
pub fn render(list: &SelectionList, style: ListingStyle) -> String {
    let width = list.len().to_string().len();
    let mut out = String::new();

    for (index, repo) in list.iter() {
        let shown = if style.truncate {
            tail_segments(&repo.path, DISPLAY_SEGMENTS)
        } else {
            repo.path.display().to_string()
        };
        let number = format!("{:>width$}", index);

        if style.colored {
            out.push_str(&format!("{}  {}", number.yellow().bold(), shown));
        } else {
            out.push_str(&format!("{}  {}", number, shown));
        }

        if let Some(branch) = &repo.branch {
            if style.colored {
                out.push_str(&format!(" [{}]", branch.as_str().cyan()));
            } else {
                out.push_str(&format!(" [{}]", branch));
            }
        }
        out.push('\n');
    }
    out
}

/// Ask for an index and move the session into that repository.
///
/// Anything but a listed index whose directory still exists leaves the
/// session as it was.
pub fn choose(list: &SelectionList, prompt: &dyn Prompt, session: &Session) -> Result<Session> {
    if list.is_empty() {
        return Ok(session.clone());
    }

    let Some(answer) = prompt.read_line("Select repository: ")? else {
        return Ok(session.clone());
    };

    match list.resolve_answer(&answer) {
        Some(repo) if repo.path.is_dir() => {
            info!("moving to {}", repo.path.display());
            Ok(session.clone().with_cwd(&repo.path))
        }
        Some(repo) => {
            debug!("{} no longer exists", repo.path.display());
            Ok(session.clone())
        }
        None => {
            debug!("no repository at {:?}", answer);
            Ok(session.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CannedPrompt;
    use shellkit_core::RepoMeta;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PLAIN: ListingStyle = ListingStyle {
        truncate: true,
        colored: false,
    };

    #[test]
    fn test_render_truncated_and_full() {
        let list = SelectionList::from_repos(vec![
            RepoMeta::new("/home/me/src/alpha"),
            RepoMeta {
                path: PathBuf::from("/home/me/work/beta"),
                branch: Some("main".to_string()),
            },
        ]);

        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(render(&list, PLAIN), format!("1  src{sep}alpha\n2  work{sep}beta [main]\n"));

        let full = render(
            &list,
            ListingStyle {
                truncate: false,
                colored: false,
            },
        );
        assert!(full.starts_with("1  /home/me/src/alpha\n"));
    }

    #[test]
    fn test_render_pads_indices() {
        let repos = (0..10).map(|i| RepoMeta::new(format!("/r/{i}"))).collect();
        let rendered = render(&SelectionList::from_repos(repos), PLAIN);
        assert!(rendered.starts_with(" 1  r"));
        assert!(rendered.ends_with("10  r/9\n") || rendered.ends_with("10  r\\9\n"));
    }

    #[test]
    fn test_choose_vanished_repo_stays_put() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let gone = temp_dir.path().join("gone");
        let list = SelectionList::from_repos(vec![RepoMeta::new(&gone)]);
        let session = Session::new(temp_dir.path());

        let after = choose(&list, &CannedPrompt::answering(["1"]), &session)?;
        assert_eq!(after, session);
        Ok(())
    }

    #[test]
    fn test_choose_end_of_input_stays_put() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join("a"))?;
        let list = SelectionList::from_repos(vec![RepoMeta::new(temp_dir.path().join("a"))]);
        let session = Session::new("/start");

        let after = choose(&list, &CannedPrompt::default(), &session)?;
        assert_eq!(after.cwd, PathBuf::from("/start"));
        Ok(())
    }
}

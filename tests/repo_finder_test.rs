use anyhow::Result;
use shellkit::commands::repos::{self, ListingStyle};
use shellkit::testing::CannedPrompt;
use shellkit_core::{Directive, Session};
use std::fs;
use tempfile::TempDir;

fn create_test_git_repo(path: std::path::PathBuf) -> Result<()> {
    fs::create_dir_all(&path)?;
    let git_repo = git2::Repository::init(&path)?;
    let signature = git2::Signature::now("Test User", "test@example.com")?;

    let tree_id = {
        let mut index = git_repo.index()?;
        index.write_tree()?
    };
    let tree = git_repo.find_tree(tree_id)?;
    git_repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])?;

    Ok(())
}

fn three_repos() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for repo_dir in ["personal/dotfiles", "work/acme-api", "work/acme-web"] {
        create_test_git_repo(temp_dir.path().join(repo_dir))?;
    }
    Ok(temp_dir)
}

// Repos at indices 1..3: picking 2 moves there, picking 9 stays put
#[test]
fn test_repo_finder_selection_scenario() -> Result<()> {
    let temp_dir = three_repos()?;
    let base_path = temp_dir.path();

    let list = repos::discover(base_path, false)?;
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(2).map(|r| r.path.clone()), Some(base_path.join("work/acme-api")));

    let start = Session::new("/somewhere/else");

    let after = repos::choose(&list, &CannedPrompt::answering(["2"]), &start)?;
    assert_eq!(after.cwd, base_path.join("work/acme-api"));
    assert_eq!(
        after.directives_since(&start),
        vec![Directive::ChangeDir(base_path.join("work/acme-api"))]
    );

    let after = repos::choose(&list, &CannedPrompt::answering(["9"]), &start)?;
    assert_eq!(after, start);

    let after = repos::choose(&list, &CannedPrompt::answering(["not a number"]), &start)?;
    assert_eq!(after, start);

    Ok(())
}

#[test]
fn test_repo_listing_shows_truncated_paths_and_branches() -> Result<()> {
    let temp_dir = three_repos()?;
    let list = repos::discover(temp_dir.path(), true)?;

    let listing = repos::render(
        &list,
        ListingStyle {
            truncate: true,
            colored: false,
        },
    );
    let lines: Vec<_> = listing.lines().collect();
    let sep = std::path::MAIN_SEPARATOR;

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&format!("1  personal{sep}dotfiles [")));
    assert!(lines[1].starts_with(&format!("2  work{sep}acme-api [")));
    assert!(lines[2].starts_with(&format!("3  work{sep}acme-web [")));
    Ok(())
}

#[test]
fn test_repo_removed_after_listing_is_ignored() -> Result<()> {
    let temp_dir = three_repos()?;
    let list = repos::discover(temp_dir.path(), false)?;
    fs::remove_dir_all(temp_dir.path().join("work/acme-web"))?;

    let start = Session::new(temp_dir.path());
    let after = repos::choose(&list, &CannedPrompt::answering(["3"]), &start)?;
    assert_eq!(after, start);
    Ok(())
}

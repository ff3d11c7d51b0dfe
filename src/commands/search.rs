use anyhow::Result;
use regex::Regex;
use shellkit_core::ports::{CommandRunner, Selector};
use shellkit_core::{hit_path, output_lines, CoreError, Invocation, Session};
use std::path::{Path, PathBuf};
use tracing::info;

/// rg's exit code for "ran fine, matched nothing"
const NO_MATCHES: i32 = 1;

/// The search binary, run from the session directory
pub struct SearchTool<'a> {
    pub runner: &'a dyn CommandRunner,
    pub program: &'a str,
    pub session: &'a Session,
}

impl SearchTool<'_> {
    fn lines(&self, args: &[&str]) -> Result<Vec<String>> {
        let invocation = Invocation::new(self.program)
            .args(args.iter().copied())
            .in_dir(&self.session.cwd);
        let output = self.runner.capture(&invocation)?;

        match output.code {
            Some(0) => Ok(output_lines(&output.stdout)),
            Some(NO_MATCHES) => Ok(Vec::new()),
            code => Err(CoreError::ToolFailed {
                tool: invocation.to_string(),
                code,
                detail: output.diagnostic(),
            }
            .into()),
        }
    }

    /// `path:line:text` hits for `pattern` in file contents
    pub fn content_hits(&self, pattern: &str) -> Result<Vec<String>> {
        self.lines(&["--line-number", "--no-heading", "--color", "never", "--", pattern])
    }

    /// Every file name the search tool would look at
    pub fn all_files(&self) -> Result<Vec<String>> {
        self.lines(&["--files"])
    }

    /// File names matching the regular expression `pattern`
    pub fn matching_files(&self, pattern: &str) -> Result<Vec<String>> {
        let regex = Regex::new(pattern).map_err(|err| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;
        Ok(self
            .all_files()?
            .into_iter()
            .filter(|name| regex.is_match(name))
            .collect())
    }
}

/// Editor to open: explicit choice, then `$EDITOR`, then the configured default.
pub fn resolve_editor(explicit: Option<&str>, env_editor: Option<&str>, default: &str) -> String {
    [explicit, env_editor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|editor| !editor.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Editor command line plus the file to open. Editors such as `code -w`
/// carry their own arguments.
pub fn editor_invocation(editor: &str, file: &Path, session: &Session) -> Invocation {
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor);
    Invocation::new(program)
        .args(parts)
        .arg(file.to_string_lossy())
        .in_dir(&session.cwd)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Contents,
    FileNames,
}

/// Search, let the user pick a hit, and open its file in `editor`.
///
/// In content mode the file is everything before the first colon of the
/// chosen line; it is opened as-is even if that is not a real path. Returns
/// the opened path, or `None` when nothing was picked.
pub fn fuzzy_edit(
    search: &SearchTool<'_>,
    selector: &dyn Selector,
    editor: &str,
    pattern: &str,
    mode: SearchMode,
) -> Result<Option<PathBuf>> {
    let candidates = match mode {
        SearchMode::Contents => search.content_hits(pattern)?,
        SearchMode::FileNames => search.matching_files(pattern)?,
    };
    info!("{} candidate(s) for {:?}", candidates.len(), pattern);

    let Some(chosen) = selector.select(&candidates)? else {
        return Ok(None);
    };

    let file = match mode {
        SearchMode::Contents => hit_path(&chosen),
        SearchMode::FileNames => PathBuf::from(chosen),
    };

    let output = search.runner.interactive(&editor_invocation(editor, &file, search.session))?;
    if !output.success() {
        return Err(CoreError::ToolFailed {
            tool: editor.to_string(),
            code: output.code,
            detail: output.diagnostic(),
        }
        .into());
    }
    Ok(Some(file))
}

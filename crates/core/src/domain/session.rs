use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The slice of interactive-shell state a command may read or change.
///
/// Commands never touch the process working directory or environment. They
/// take a `Session`, return an updated copy, and the caller turns the
/// difference into [`Directive`]s for the parent shell to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
}

impl Session {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Resolve a possibly relative path against the session working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Changes needed to turn `before` into `self`.
    pub fn directives_since(&self, before: &Session) -> Vec<Directive> {
        let mut directives = Vec::new();

        if self.cwd != before.cwd {
            directives.push(Directive::ChangeDir(self.cwd.clone()));
        }

        for (name, value) in &self.env {
            if before.env.get(name) != Some(value) {
                directives.push(Directive::SetVar {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }

        directives
    }
}

/// A single change to apply to the calling shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    ChangeDir(PathBuf),
    SetVar { name: String, value: String },
}

use std::fmt;
use std::path::PathBuf;

/// A program plus its ordered arguments, built per call and thrown away after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let invocation = Invocation::new("p4").args(["clients", "-u"]).arg("alice");
        assert_eq!(invocation.program, "p4");
        assert_eq!(invocation.args, vec!["clients", "-u", "alice"]);
        assert_eq!(invocation.current_dir, None);
    }

    #[test]
    fn test_display_quotes_spaced_args() {
        let invocation = Invocation::new("ssh").arg("bob@host").arg("mkdir -p ~/.ssh");
        assert_eq!(invocation.to_string(), "ssh bob@host \"mkdir -p ~/.ssh\"");
    }
}

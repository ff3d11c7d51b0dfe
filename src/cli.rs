use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "shellkit")]
#[command(about = "Interactive-shell conveniences wrapped around fzf, rg, p4, ssh and friends")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fuzzy selector program (overrides config)
    #[arg(long, global = true)]
    pub selector: Option<String>,

    /// Dialect used for directory and variable changes printed on stdout
    #[arg(long, global = true, value_enum, default_value_t = ShellDialect::native())]
    pub shell: ShellDialect,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run a command with each line of stdin as an extra argument
    #[command(visible_alias = "xargs")]
    Pipe {
        /// Program to run, followed by any leading arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List approved command verbs containing a pattern
    #[command(visible_alias = "verb")]
    Verbs {
        #[arg(default_value = "")]
        pattern: String,
    },

    /// Create a symbolic link at DESTINATION pointing to TARGET
    #[command(visible_alias = "ln")]
    Link {
        destination: PathBuf,
        target: PathBuf,
        /// Replace an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Convert line endings (CRLF to LF unless --reverse)
    #[command(visible_alias = "dos2unix")]
    Eol {
        file: PathBuf,
        /// Write here instead of overwriting FILE
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Convert LF to CRLF
        #[arg(short, long)]
        reverse: bool,
    },

    /// Run commands in an elevated shell and wait for it
    #[command(visible_alias = "elevate")]
    Sudo {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        commands: Vec<String>,
    },

    /// Open the editor on a scratch buffer holding the clipboard
    #[command(visible_alias = "vclip")]
    Clip,

    /// Pick a Perforce workspace, move into it and make it active
    #[command(name = "p4", visible_alias = "p4c")]
    Perforce {
        /// Directory holding one folder per workspace
        #[arg(long)]
        root: Option<PathBuf>,
        /// Perforce user whose workspaces are listed
        #[arg(long)]
        user: Option<String>,
    },

    /// List git repositories under a directory and jump to one
    #[command(visible_alias = "cdr")]
    Repos {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Show full paths instead of the last two segments
        #[arg(long)]
        full: bool,
        /// Show the checked-out branch of each repository
        #[arg(long)]
        branch: bool,
    },

    /// Append a local public key to a remote authorized_keys file
    #[command(name = "ssh-copy-id", visible_alias = "sshkey")]
    SshCopyId {
        user: String,
        host: String,
        #[arg(long)]
        key: Option<PathBuf>,
    },

    /// Record this terminal session to a timestamped log file
    #[command(visible_alias = "log")]
    Transcript {
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List running processes whose name matches a regular expression
    #[command(visible_alias = "pgrep")]
    Ps { pattern: String },

    /// Delete a path and everything below it without asking
    #[command(visible_alias = "nuke")]
    Rmrf { path: PathBuf },

    /// Search, pick a hit with the fuzzy selector and open it in an editor
    #[command(visible_alias = "fe")]
    Edit {
        pattern: String,
        #[arg(long)]
        editor: Option<String>,
        /// Match file names instead of file contents
        #[arg(long)]
        files: bool,
    },

    /// List file names matching a regular expression
    #[command(visible_alias = "ff")]
    Files { pattern: String },

    /// Print shell functions that apply directory changes to the current shell
    Init {
        #[arg(value_enum)]
        dialect: ShellDialect,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellDialect {
    Posix,
    Powershell,
}

impl ShellDialect {
    pub fn native() -> Self {
        if cfg!(windows) {
            ShellDialect::Powershell
        } else {
            ShellDialect::Posix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_verbs_default_pattern() {
        let args = CliArgs::parse_from(["shellkit", "verbs"]);
        assert_eq!(args.command, Commands::Verbs { pattern: String::new() });
        assert_eq!(args.config, None);
        assert_eq!(args.shell, ShellDialect::native());
    }

    #[test]
    fn test_cli_parse_alias_and_flags() {
        let args = CliArgs::parse_from(["shellkit", "ln", "-f", "/tmp/link", "/tmp/target"]);
        assert_eq!(
            args.command,
            Commands::Link {
                destination: PathBuf::from("/tmp/link"),
                target: PathBuf::from("/tmp/target"),
                force: true,
            }
        );
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "shellkit",
            "repos",
            "--full",
            "--shell",
            "powershell",
            "--config",
            "/custom/config.toml",
        ]);
        assert_eq!(args.shell, ShellDialect::Powershell);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(
            args.command,
            Commands::Repos {
                root: None,
                full: true,
                branch: false,
            }
        );
    }

    #[test]
    fn test_cli_parse_pipe_keeps_hyphen_args() {
        let args = CliArgs::parse_from(["shellkit", "pipe", "ls", "-la"]);
        assert_eq!(
            args.command,
            Commands::Pipe {
                command: vec!["ls".to_string(), "-la".to_string()],
            }
        );
    }

    #[test]
    fn test_cli_parse_p4_name() {
        let args = CliArgs::parse_from(["shellkit", "p4c", "--user", "alice"]);
        assert_eq!(
            args.command,
            Commands::Perforce {
                root: None,
                user: Some("alice".to_string()),
            }
        );
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(CliArgs::try_parse_from(["shellkit"]).is_err());
    }
}

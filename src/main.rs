use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use shellkit_core::ports::SystemClock;
use shellkit_core::{Conversion, Platform, Session};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::{error, info};

use shellkit::adapters::process::SystemRunner;
use shellkit::adapters::process_table::SystemProcessTable;
use shellkit::adapters::prompt::TerminalPrompt;
use shellkit::adapters::selector::FuzzyFinder;
use shellkit::cli::{CliArgs, Commands};
use shellkit::commands::{
    clip, elevate, eol, link, perforce, pipe, procs, repos, rmrf, search, ssh_key, transcript, verbs,
};
use shellkit::config::Config;
use shellkit::shell;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries directives for the calling shell
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let config = Config::from_cli_and_file(&args)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let session = Session::new(cwd);
    let runner = SystemRunner::new();
    let styled = io::stderr().is_tty();

    match args.command {
        Commands::Pipe { command } => {
            let mut input = String::new();
            if !io::stdin().is_tty() {
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read piped input")?;
            }
            let output = pipe::pipe_to_command(&runner, &command, &input)?;
            return Ok(ExitCode::from(pipe::exit_status(output.code)));
        }

        Commands::Verbs { pattern } => {
            print!("{}", verbs::list(&pattern, io::stdout().is_tty()));
        }

        Commands::Link {
            destination,
            target,
            force,
        } => {
            let created = link::create_link(&session, &destination, &target, force)?;
            eprintln!("Linked {} -> {}", created.display(), target.display());
        }

        Commands::Eol { file, output, reverse } => {
            let report = eol::convert_file(
                &session,
                &file,
                output.as_deref(),
                Conversion::from_reverse_flag(reverse),
            )?;
            if !report.changed {
                eprintln!("{}: no line endings to convert", report.output.display());
            }
        }

        Commands::Sudo { commands } => {
            elevate::run_elevated(&runner, Platform::current(), &config.tools.elevated_shell, &commands)?;
        }

        Commands::Clip => {
            clip::open_clipboard(
                &runner,
                &SystemClock,
                &config.tools.clipboard_editor,
                &std::env::temp_dir(),
            )?;
        }

        Commands::Perforce { root, user } => {
            let user = user
                .or_else(|| perforce::default_user(|name| std::env::var(name).ok()))
                .context("No Perforce user given and none found in P4USER, USER or USERNAME")?;
            let request = perforce::WorkspaceRequest {
                program: config.tools.perforce.clone(),
                root: root.unwrap_or_else(|| config.paths.perforce_root.clone()),
                user,
            };
            let selector = FuzzyFinder::new(config.tools.fuzzy_selector.clone());
            let after = perforce::select_workspace(&runner, &selector, &request, &session)?;
            emit(&after, &session, args.shell);
        }

        Commands::Repos { root, full, branch } => {
            let root = root.unwrap_or_else(|| config.paths.repo_root.clone());
            let list = repos::discover(&session.resolve(&root), branch)?;
            if list.is_empty() {
                eprintln!("No repositories under {}", root.display());
                return Ok(ExitCode::SUCCESS);
            }
            let style = repos::ListingStyle {
                truncate: config.repos.truncate_paths && !full,
                colored: styled,
            };
            eprint!("{}", repos::render(&list, style));
            let after = repos::choose(&list, &TerminalPrompt::new(), &session)?;
            emit(&after, &session, args.shell);
        }

        Commands::SshCopyId { user, host, key } => {
            let key = key.unwrap_or_else(|| config.paths.ssh_public_key.clone());
            match ssh_key::copy_key(&runner, &config.tools.remote_shell, &user, &host, &session.resolve(&key))? {
                ssh_key::KeyCopyOutcome::Copied => eprintln!("Key copied to {}@{}", user, host),
                ssh_key::KeyCopyOutcome::KeyMissing(path) => {
                    eprintln!("No public key at {}; nothing copied", path.display())
                }
            }
        }

        Commands::Transcript { dir } => {
            let dir = dir.unwrap_or_else(|| config.paths.transcript_dir.clone());
            let started = transcript::start(
                &runner,
                &SystemClock,
                Platform::current(),
                config.tools.transcript_recorder.as_deref(),
                &session.resolve(&dir),
            )?;
            info!("transcript via {}", started.invocation);
            eprintln!("Transcript saved to {}", started.path.display());
        }

        Commands::Ps { pattern } => {
            let found = procs::find_processes(&SystemProcessTable::new(), &pattern)?;
            print!("{}", procs::render(&found));
        }

        Commands::Rmrf { path } => {
            let removed = rmrf::force_remove(&session, &path)?;
            eprintln!("Removed {}", removed.display());
        }

        Commands::Edit { pattern, editor, files } => {
            let env_editor = std::env::var("EDITOR").ok();
            let editor = search::resolve_editor(editor.as_deref(), env_editor.as_deref(), &config.tools.editor);
            let tool = search::SearchTool {
                runner: &runner,
                program: &config.tools.search,
                session: &session,
            };
            let mode = if files {
                search::SearchMode::FileNames
            } else {
                search::SearchMode::Contents
            };
            let selector = FuzzyFinder::new(config.tools.fuzzy_selector.clone());
            search::fuzzy_edit(&tool, &selector, &editor, &pattern, mode)?;
        }

        Commands::Files { pattern } => {
            let tool = search::SearchTool {
                runner: &runner,
                program: &config.tools.search,
                session: &session,
            };
            for name in tool.matching_files(&pattern)? {
                println!("{}", name);
            }
        }

        Commands::Init { dialect } => {
            let exe = std::env::current_exe().context("Failed to locate the shellkit binary")?;
            print!("{}", shell::init_script(dialect, &exe.to_string_lossy()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print what changed between `before` and `after` for the calling shell.
fn emit(after: &Session, before: &Session, dialect: shellkit::cli::ShellDialect) {
    let directives = after.directives_since(before);
    if !directives.is_empty() {
        println!("{}", shell::render_all(&directives, dialect));
    }
}

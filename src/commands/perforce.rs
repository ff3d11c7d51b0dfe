use anyhow::{Context, Result};
use shellkit_core::ports::{CommandRunner, Selector};
use shellkit_core::{parse_clients, CoreError, Invocation, Session, P4CLIENT_VAR};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Where workspaces live and who owns them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRequest {
    /// Perforce command-line client
    pub program: String,
    /// Directory holding one folder per workspace
    pub root: PathBuf,
    pub user: String,
}

/// Perforce user from the environment: `P4USER`, then the login name.
pub fn default_user(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["P4USER", "USER", "USERNAME"]
        .into_iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
}

/// Workspace names owned by the requesting user.
pub fn list_workspaces(runner: &dyn CommandRunner, request: &WorkspaceRequest) -> Result<Vec<String>> {
    let invocation = Invocation::new(request.program.as_str()).args(["clients", "-u", request.user.as_str()]);
    let output = runner.capture(&invocation)?;
    if !output.success() {
        return Err(CoreError::ToolFailed {
            tool: invocation.to_string(),
            code: output.code,
            detail: output.diagnostic(),
        }
        .into());
    }
    Ok(parse_clients(&output.stdout)?)
}

/// Pick a workspace, move into `root/<name>` and make it the active client.
///
/// No selection returns the session unchanged. The workspace directory is
/// created before the client is switched, so a failing `p4 set` leaves it
/// behind.
pub fn select_workspace(
    runner: &dyn CommandRunner,
    selector: &dyn Selector,
    request: &WorkspaceRequest,
    session: &Session,
) -> Result<Session> {
    let workspaces = list_workspaces(runner, request)?;
    info!("{} workspace(s) for {}", workspaces.len(), request.user);

    let Some(workspace) = selector.select(&workspaces)? else {
        return Ok(session.clone());
    };

    let destination = request.root.join(&workspace);
    fs::create_dir_all(&destination)
        .with_context(|| format!("Failed to create {}", destination.display()))?;
    let moved = session.clone().with_cwd(&destination);

    let set = Invocation::new(request.program.as_str())
        .arg("set")
        .arg(format!("{}={}", P4CLIENT_VAR, workspace))
        .in_dir(&destination);
    let output = runner.capture(&set)?;
    if !output.success() {
        return Err(CoreError::WorkspaceSetFailed {
            workspace,
            code: output.code,
            detail: output.diagnostic(),
        }
        .into());
    }

    info!("active workspace is now {}", workspace);
    Ok(moved.with_var(P4CLIENT_VAR, workspace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CannedSelector, RecordingRunner};
    use shellkit_core::ports::ProcessOutput;
    use tempfile::TempDir;

    const CLIENTS: &str = "Client ws-alpha 2024/01/10 root /p4/ws-alpha 'Created by alice. '\n\
Client ws-beta 2024/02/11 root /p4/ws-beta 'Created by alice. '\n";

    fn request(root: &std::path::Path) -> WorkspaceRequest {
        WorkspaceRequest {
            program: "p4".to_string(),
            root: root.to_path_buf(),
            user: "alice".to_string(),
        }
    }

    #[test]
    fn test_default_user_prefers_p4user() {
        let env = |name: &str| match name {
            "P4USER" => Some("perforce-alice".to_string()),
            "USER" => Some("alice".to_string()),
            _ => None,
        };
        assert_eq!(default_user(env), Some("perforce-alice".to_string()));
        assert_eq!(default_user(|n: &str| (n == "USERNAME").then(|| "bob".to_string())), Some("bob".to_string()));
        assert_eq!(default_user(|_: &str| Some(String::new())), None);
    }

    #[test]
    fn test_list_workspaces_runs_clients_for_user() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let runner = RecordingRunner::new().respond(ProcessOutput::with_stdout(0, CLIENTS));

        let names = list_workspaces(&runner, &request(temp_dir.path()))?;

        assert_eq!(names, vec!["ws-alpha", "ws-beta"]);
        assert_eq!(runner.calls()[0].invocation.args, vec!["clients", "-u", "alice"]);
        Ok(())
    }

    #[test]
    fn test_listing_failure_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let runner = RecordingRunner::new().respond(ProcessOutput::exited(1));
        let selector = CannedSelector::choosing("ws-alpha");
        let session = Session::new("/work");

        let result = select_workspace(&runner, &selector, &request(temp_dir.path()), &session);

        assert!(result.is_err());
        assert!(selector.offered().is_empty());
        Ok(())
    }

    #[test]
    fn test_listing_failure_keeps_p4_message() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let runner = RecordingRunner::new().respond(ProcessOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "Perforce password (P4PASSWD) invalid or unset.\n".to_string(),
        });

        let err = list_workspaces(&runner, &request(temp_dir.path())).unwrap_err();

        assert!(err.to_string().ends_with("status 1: Perforce password (P4PASSWD) invalid or unset."));
        Ok(())
    }

    #[test]
    fn test_cancelled_selection_changes_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let runner = RecordingRunner::new().respond(ProcessOutput::with_stdout(0, CLIENTS));
        let selector = CannedSelector::cancelling();
        let session = Session::new("/work");

        let after = select_workspace(&runner, &selector, &request(temp_dir.path()), &session)?;

        assert_eq!(after, session);
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
        Ok(())
    }
}

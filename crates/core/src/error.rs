use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Path does not exist: {path}")]
    MissingPath { path: String },

    #[error("Destination already exists: {path} (use --force to replace it)")]
    AlreadyExists { path: String },

    /// `detail` is whatever the tool wrote to stderr, trimmed; often empty
    #[error("{tool} exited with status {}{}", display_code(.code), display_detail(.detail))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        detail: String,
    },

    #[error(
        "Failed to set active Perforce workspace to '{workspace}' (status {}){}",
        display_code(.code),
        display_detail(.detail)
    )]
    WorkspaceSetFailed {
        workspace: String,
        code: Option<i32>,
        detail: String,
    },

    #[error("Unexpected output from {tool}: {line:?}")]
    MalformedToolOutput { tool: String, line: String },

    #[error("{operation} is not supported on {platform}")]
    UnsupportedPlatform { operation: String, platform: String },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No command given to {operation}")]
    EmptyCommand { operation: String },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

fn display_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {}", detail)
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_error_names_workspace() {
        let err = CoreError::WorkspaceSetFailed {
            workspace: "ws-alpha".to_string(),
            code: Some(1),
            detail: String::new(),
        };
        let message = err.to_string();
        assert!(message.contains("ws-alpha"));
        assert!(message.contains("status 1"));
    }

    #[test]
    fn test_tool_failed_without_code() {
        let err = CoreError::ToolFailed {
            tool: "rg".to_string(),
            code: None,
            detail: String::new(),
        };
        assert_eq!(err.to_string(), "rg exited with status signal");
    }

    #[test]
    fn test_tool_failed_carries_stderr_detail() {
        let err = CoreError::ToolFailed {
            tool: "rg".to_string(),
            code: Some(2),
            detail: "regex parse error: unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "rg exited with status 2: regex parse error: unclosed group"
        );

        let err = CoreError::WorkspaceSetFailed {
            workspace: "ws-alpha".to_string(),
            code: Some(1),
            detail: "Perforce password (P4PASSWD) invalid or unset.".to_string(),
        };
        assert!(err.to_string().ends_with("(status 1): Perforce password (P4PASSWD) invalid or unset."));
    }
}

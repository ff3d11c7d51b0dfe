use crate::error::{CoreError, Result};

/// Environment variable holding the active Perforce workspace
pub const P4CLIENT_VAR: &str = "P4CLIENT";

/// Parse `p4 clients` output into workspace names.
///
/// Every non-blank line looks like `Client <name> <date> root <path> '<desc>'`;
/// the name is the second whitespace-separated token. A non-blank line
/// without one aborts the whole parse.
pub fn parse_clients(output: &str) -> Result<Vec<String>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .nth(1)
                .map(str::to_string)
                .ok_or_else(|| CoreError::MalformedToolOutput {
                    tool: "p4 clients".to_string(),
                    line: line.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clients() {
        let output = "\
Client ws-alpha 2024/01/10 root /p4/ws-alpha 'Created by alice. '
Client ws-beta 2024/02/11 root /p4/ws-beta 'Created by alice. '

";
        assert_eq!(parse_clients(output).unwrap(), vec!["ws-alpha", "ws-beta"]);
    }

    #[test]
    fn test_empty_output_is_empty_list() {
        assert!(parse_clients("").unwrap().is_empty());
    }

    #[test]
    fn test_short_line_is_rejected() {
        let err = parse_clients("Client ws-alpha x\nbroken\n").unwrap_err();
        assert!(matches!(err, CoreError::MalformedToolOutput { ref line, .. } if line == "broken"));
    }
}

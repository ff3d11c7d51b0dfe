use anyhow::Result;
use regex::Regex;
use shellkit_core::ports::{ProcessInfo, ProcessTable};
use shellkit_core::CoreError;

/// Running processes whose name matches `pattern`, by name then pid.
pub fn find_processes(table: &dyn ProcessTable, pattern: &str) -> Result<Vec<ProcessInfo>> {
    let regex = Regex::new(pattern).map_err(|err| CoreError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })?;

    let mut matches: Vec<_> = table
        .list()?
        .into_iter()
        .filter(|process| regex.is_match(&process.name))
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name).then(a.pid.cmp(&b.pid)));
    Ok(matches)
}

pub fn render(processes: &[ProcessInfo]) -> String {
    let mut out = format!("{:>8} {:>10}  {}\n", "PID", "MEM(MB)", "NAME");
    for process in processes {
        out.push_str(&format!(
            "{:>8} {:>10.1}  {}\n",
            process.pid,
            process.memory as f64 / (1024.0 * 1024.0),
            process.name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticProcessTable;

    fn table() -> StaticProcessTable {
        let process = |pid, name: &str| ProcessInfo {
            pid,
            name: name.to_string(),
            memory: 2 * 1024 * 1024,
        };
        StaticProcessTable(vec![
            process(30, "sshd"),
            process(12, "bash"),
            process(7, "sshd"),
            process(99, "ssh-agent"),
        ])
    }

    #[test]
    fn test_regex_filter_and_order() -> Result<()> {
        let found = find_processes(&table(), "^ssh")?;
        let found: Vec<_> = found.iter().map(|p| (p.name.as_str(), p.pid)).collect();
        assert_eq!(found, vec![("ssh-agent", 99), ("sshd", 7), ("sshd", 30)]);
        Ok(())
    }

    #[test]
    fn test_no_match_is_empty() -> Result<()> {
        assert!(find_processes(&table(), "^zsh$")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_regex() {
        let err = find_processes(&table(), "(").unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::InvalidPattern { .. })));
    }

    #[test]
    fn test_render_has_memory_in_megabytes() {
        let rendered = render(&find_processes(&table(), "bash").unwrap());
        assert!(rendered.lines().nth(1).unwrap().contains("2.0"));
    }
}

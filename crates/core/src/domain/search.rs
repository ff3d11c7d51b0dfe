use std::path::PathBuf;

/// File path of a `path:line:text` search hit: everything before the first
/// colon, or the whole line when there is none.
///
/// The result is not checked against the filesystem.
pub fn hit_path(line: &str) -> PathBuf {
    let path = line.split(':').next().unwrap_or(line);
    PathBuf::from(path)
}

/// Non-empty lines of tool output, in order.
pub fn output_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

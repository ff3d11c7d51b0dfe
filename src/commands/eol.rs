use anyhow::{Context, Result};
use shellkit_core::{convert, Conversion, CoreError, Session};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EolReport {
    pub output: PathBuf,
    /// Whether any line ending was rewritten
    pub changed: bool,
}

/// Rewrite the line endings of `file` into `output` (the file itself when
/// `None`).
///
/// Bytes are never decoded. An in-place conversion that finds nothing to
/// change leaves the file alone.
pub fn convert_file(
    session: &Session,
    file: &Path,
    output: Option<&Path>,
    conversion: Conversion,
) -> Result<EolReport> {
    let input = session.resolve(file);
    if !input.is_file() {
        return Err(CoreError::MissingPath {
            path: input.display().to_string(),
        }
        .into());
    }
    let output = output.map_or_else(|| input.clone(), |p| session.resolve(p));

    let contents = fs::read(&input).with_context(|| format!("Failed to read {}", input.display()))?;
    let converted = convert(&contents, conversion);
    let changed = matches!(converted, Cow::Owned(_));

    if !changed && output == input {
        debug!("{} already uses the requested line endings", input.display());
    } else {
        fs::write(&output, &converted).with_context(|| format!("Failed to write {}", output.display()))?;
        info!("{:?}: {} -> {}", conversion, input.display(), output.display());
    }

    Ok(EolReport { output, changed })
}

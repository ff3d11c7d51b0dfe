use anyhow::Result;
use shellkit_core::ports::{Clock, CommandRunner};
use shellkit_core::Invocation;
use std::path::{Path, PathBuf};
use tracing::info;

/// Vim commands run on startup: paste the `+` register, go to the top, and
/// make Ctrl-S write and quit.
pub const CLIPBOARD_COMMANDS: [&str; 3] = [
    "normal! \"+P",
    "normal! gg",
    "nnoremap <buffer> <C-s> :wq<CR>",
];

pub fn clipboard_invocation(editor: &str, scratch: &Path) -> Invocation {
    let mut invocation = Invocation::new(editor).arg(scratch.to_string_lossy());
    for command in CLIPBOARD_COMMANDS {
        invocation = invocation.args(["-c", command]);
    }
    invocation
}

/// Open `editor` on a new scratch file in `scratch_dir` holding the clipboard.
///
/// Returns the scratch path; the editor is not waited for.
pub fn open_clipboard(
    runner: &dyn CommandRunner,
    clock: &dyn Clock,
    editor: &str,
    scratch_dir: &Path,
) -> Result<PathBuf> {
    let scratch = scratch_dir.join(format!("clipboard-{}.txt", clock.now().format("%Y%m%d-%H%M%S")));
    info!("opening clipboard in {} ({})", editor, scratch.display());
    runner.launch(&clipboard_invocation(editor, &scratch))?;
    Ok(scratch)
}

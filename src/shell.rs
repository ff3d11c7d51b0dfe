//! Rendering session changes for the calling shell.
//!
//! A child process cannot change its parent's directory or environment, so
//! navigating commands print [`Directive`]s on stdout and the functions from
//! `shellkit init` evaluate them.

use shellkit_core::Directive;

use crate::cli::ShellDialect;

pub fn render(directive: &Directive, dialect: ShellDialect) -> String {
    match (directive, dialect) {
        (Directive::ChangeDir(path), ShellDialect::Posix) => {
            format!("cd -- {}", posix_quote(&path.to_string_lossy()))
        }
        (Directive::ChangeDir(path), ShellDialect::Powershell) => {
            format!("Set-Location -LiteralPath {}", powershell_quote(&path.to_string_lossy()))
        }
        (Directive::SetVar { name, value }, ShellDialect::Posix) => {
            format!("export {}={}", name, posix_quote(value))
        }
        (Directive::SetVar { name, value }, ShellDialect::Powershell) => {
            format!("$env:{} = {}", name, powershell_quote(value))
        }
    }
}

pub fn render_all(directives: &[Directive], dialect: ShellDialect) -> String {
    directives
        .iter()
        .map(|d| render(d, dialect))
        .collect::<Vec<_>>()
        .join("\n")
}

fn posix_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Wrapper functions for the commands that change directory or environment.
pub fn init_script(dialect: ShellDialect, exe: &str) -> String {
    match dialect {
        ShellDialect::Posix => {
            let exe = posix_quote(exe);
            format!(
                r#"cdr() {{
    local out
    out="$({exe} --shell posix repos "$@")" && eval "$out"
}}
p4c() {{
    local out
    out="$({exe} --shell posix p4 "$@")" && eval "$out"
}}
"#
            )
        }
        ShellDialect::Powershell => {
            let exe = powershell_quote(exe);
            format!(
                r#"function cdr {{
    $out = & {exe} --shell powershell repos @args
    if ($LASTEXITCODE -eq 0 -and $out) {{ Invoke-Expression ($out -join "`n") }}
}}
function p4c {{
    $out = & {exe} --shell powershell p4 @args
    if ($LASTEXITCODE -eq 0 -and $out) {{ Invoke-Expression ($out -join "`n") }}
}}
"#
            )
        }
    }
}

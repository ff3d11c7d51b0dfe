use crossterm::style::Stylize;
use shellkit_core::{find_verbs, Verb};

/// Table of verbs with their alias prefix and group.
pub fn render(verbs: &[&Verb], styled: bool) -> String {
    let mut out = String::new();
    let header = format!("{:<14} {:<7} {}", "Verb", "Alias", "Group");
    if styled {
        out.push_str(&format!("{}\n", header.bold()));
    } else {
        out.push_str(&header);
        out.push('\n');
    }

    for verb in verbs {
        out.push_str(&format!("{:<14} {:<7} {}\n", verb.name, verb.alias_prefix, verb.group));
    }
    out
}

pub fn list(pattern: &str, styled: bool) -> String {
    render(&find_verbs(pattern), styled)
}

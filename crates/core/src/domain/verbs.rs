use std::fmt;

/// Functional area an approved verb belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbGroup {
    Common,
    Communications,
    Data,
    Diagnostic,
    Lifecycle,
    Other,
    Security,
}

impl fmt::Display for VerbGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerbGroup::Common => "Common",
            VerbGroup::Communications => "Communications",
            VerbGroup::Data => "Data",
            VerbGroup::Diagnostic => "Diagnostic",
            VerbGroup::Lifecycle => "Lifecycle",
            VerbGroup::Other => "Other",
            VerbGroup::Security => "Security",
        };
        f.write_str(name)
    }
}

/// One entry of the approved command-verb vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    pub name: &'static str,
    pub alias_prefix: &'static str,
    pub group: VerbGroup,
}

const fn verb(name: &'static str, alias_prefix: &'static str, group: VerbGroup) -> Verb {
    Verb {
        name,
        alias_prefix,
        group,
    }
}

use VerbGroup::*;

pub const APPROVED_VERBS: &[Verb] = &[
    verb("Add", "a", Common),
    verb("Clear", "cl", Common),
    verb("Close", "cs", Common),
    verb("Copy", "cp", Common),
    verb("Enter", "et", Common),
    verb("Exit", "ex", Common),
    verb("Find", "fd", Common),
    verb("Format", "f", Common),
    verb("Get", "g", Common),
    verb("Hide", "h", Common),
    verb("Join", "j", Common),
    verb("Lock", "lk", Common),
    verb("Move", "m", Common),
    verb("New", "n", Common),
    verb("Open", "op", Common),
    verb("Optimize", "om", Common),
    verb("Pop", "pop", Common),
    verb("Push", "pu", Common),
    verb("Redo", "re", Common),
    verb("Remove", "r", Common),
    verb("Rename", "rn", Common),
    verb("Reset", "rs", Common),
    verb("Resize", "rz", Common),
    verb("Search", "sr", Common),
    verb("Select", "sc", Common),
    verb("Set", "s", Common),
    verb("Show", "sh", Common),
    verb("Skip", "sk", Common),
    verb("Split", "sl", Common),
    verb("Step", "st", Common),
    verb("Switch", "sw", Common),
    verb("Undo", "un", Common),
    verb("Unlock", "uk", Common),
    verb("Watch", "wc", Common),
    verb("Connect", "cc", Communications),
    verb("Disconnect", "dc", Communications),
    verb("Read", "rd", Communications),
    verb("Receive", "rc", Communications),
    verb("Send", "sd", Communications),
    verb("Write", "wr", Communications),
    verb("Backup", "ba", Data),
    verb("Checkpoint", "ch", Data),
    verb("Compare", "cr", Data),
    verb("Compress", "cm", Data),
    verb("Convert", "cv", Data),
    verb("ConvertFrom", "cf", Data),
    verb("ConvertTo", "ct", Data),
    verb("Dismount", "dm", Data),
    verb("Edit", "ed", Data),
    verb("Expand", "en", Data),
    verb("Export", "ep", Data),
    verb("Group", "gp", Data),
    verb("Import", "ip", Data),
    verb("Initialize", "in", Data),
    verb("Limit", "l", Data),
    verb("Merge", "mg", Data),
    verb("Mount", "mt", Data),
    verb("Out", "o", Data),
    verb("Publish", "pb", Data),
    verb("Restore", "rr", Data),
    verb("Save", "sv", Data),
    verb("Sync", "sy", Data),
    verb("Unpublish", "ub", Data),
    verb("Update", "ud", Data),
    verb("Debug", "db", Diagnostic),
    verb("Measure", "ms", Diagnostic),
    verb("Ping", "pi", Diagnostic),
    verb("Repair", "rp", Diagnostic),
    verb("Resolve", "rv", Diagnostic),
    verb("Test", "t", Diagnostic),
    verb("Trace", "tr", Diagnostic),
    verb("Approve", "ap", Lifecycle),
    verb("Assert", "as", Lifecycle),
    verb("Build", "bd", Lifecycle),
    verb("Complete", "cmp", Lifecycle),
    verb("Confirm", "cn", Lifecycle),
    verb("Deny", "dn", Lifecycle),
    verb("Deploy", "dp", Lifecycle),
    verb("Disable", "d", Lifecycle),
    verb("Enable", "e", Lifecycle),
    verb("Install", "is", Lifecycle),
    verb("Invoke", "i", Lifecycle),
    verb("Register", "rg", Lifecycle),
    verb("Request", "rq", Lifecycle),
    verb("Restart", "rt", Lifecycle),
    verb("Resume", "ru", Lifecycle),
    verb("Start", "sa", Lifecycle),
    verb("Stop", "sp", Lifecycle),
    verb("Submit", "sb", Lifecycle),
    verb("Suspend", "ss", Lifecycle),
    verb("Uninstall", "us", Lifecycle),
    verb("Unregister", "ur", Lifecycle),
    verb("Wait", "w", Lifecycle),
    verb("Use", "u", Other),
    verb("Block", "bl", Security),
    verb("Grant", "gr", Security),
    verb("Protect", "pt", Security),
    verb("Revoke", "rk", Security),
    verb("Unblock", "ul", Security),
    verb("Unprotect", "up", Security),
];

/// Approved verbs whose name contains `pattern`, ignoring case.
///
/// An empty pattern matches every verb.
pub fn find_verbs(pattern: &str) -> Vec<&'static Verb> {
    let needle = pattern.to_lowercase();
    APPROVED_VERBS
        .iter()
        .filter(|verb| verb.name.to_lowercase().contains(&needle))
        .collect()
}

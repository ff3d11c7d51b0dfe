use anyhow::Result;

/// A running process as reported by the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// Resident memory in bytes
    pub memory: u64,
}

/// Port for listing live processes
pub trait ProcessTable {
    fn list(&self) -> Result<Vec<ProcessInfo>>;
}

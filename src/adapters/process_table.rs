use anyhow::Result;
use shellkit_core::ports::{ProcessInfo, ProcessTable};
use sysinfo::{ProcessesToUpdate, System};

/// Live process list from the OS via sysinfo
#[derive(Debug, Default)]
pub struct SystemProcessTable;

impl SystemProcessTable {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessTable for SystemProcessTable {
    fn list(&self) -> Result<Vec<ProcessInfo>> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        Ok(system
            .processes()
            .values()
            .map(|process| ProcessInfo {
                pid: process.pid().as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                memory: process.memory(),
            })
            .collect())
    }
}

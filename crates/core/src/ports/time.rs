use chrono::{DateTime, Local};

/// Clock abstraction for testability
pub trait Clock {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// System clock implementation
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

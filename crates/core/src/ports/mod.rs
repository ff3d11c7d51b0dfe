pub mod processes;
pub mod runner;
pub mod selector;
pub mod time;

// Re-exports
pub use processes::*;
pub use runner::*;
pub use selector::*;
pub use time::*;

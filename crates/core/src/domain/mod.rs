pub mod invocation;
pub mod line_endings;
pub mod platform;
pub mod repo;
pub mod search;
pub mod session;
pub mod verbs;
pub mod workspace;

// Re-exports
pub use invocation::*;
pub use line_endings::*;
pub use platform::*;
pub use repo::*;
pub use search::*;
pub use session::*;
pub use verbs::*;
pub use workspace::*;

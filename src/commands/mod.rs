//! One module per subcommand. Each is written against the core ports so the
//! interactive parts can be driven by canned answers.

pub mod clip;
pub mod elevate;
pub mod eol;
pub mod link;
pub mod perforce;
pub mod pipe;
pub mod procs;
pub mod repos;
pub mod rmrf;
pub mod search;
pub mod ssh_key;
pub mod transcript;
pub mod verbs;

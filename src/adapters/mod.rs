pub mod discovery;
pub mod git;
pub mod process;
pub mod process_table;
pub mod prompt;
pub mod selector;

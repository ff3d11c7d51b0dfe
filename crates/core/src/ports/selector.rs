use anyhow::Result;

/// Port for picking one line out of many (a fuzzy finder in practice)
pub trait Selector {
    /// Returns `None` when the user cancels or nothing matched
    fn select(&self, candidates: &[String]) -> Result<Option<String>>;
}

/// Port for reading one line of interactive input
pub trait Prompt {
    /// Returns `None` at end of input
    fn read_line(&self, message: &str) -> Result<Option<String>>;
}

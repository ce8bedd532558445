use derive_more::Display;

/// Counts of filesystem entries created by one materialization pass.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq)]
#[display("{directories} directories and {files} files")]
pub struct Report {
    pub directories: usize,
    pub files: usize,
}

use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Tree-text file to read; standard input when `None`.
    pub input: Option<PathBuf>,
    /// Base directory the structure is created under.
    pub dest: PathBuf,
    /// Reject input containing unrecognized lines instead of skipping them.
    pub strict: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            dest: cli.dest,
            strict: cli.strict,
        }
    }
}

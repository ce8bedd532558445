use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Create directories and empty files from a pasted tree diagram")]
pub struct Cli {
    /// File holding the tree diagram. Reads standard input when omitted.
    pub input: Option<PathBuf>,

    /// Directory the structure is created under
    #[clap(long, short, default_value = ".")]
    pub dest: PathBuf,

    /// Fail on lines that do not match the tree grammar instead of skipping them
    #[clap(long)]
    pub strict: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

use std::path::PathBuf;

use compio::fs;
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::materializer::Report;
use crate::materializer::path_stack::PathStack;
use crate::parser::TreeLine;

/// Creates the parsed hierarchy under a base directory.
///
/// Directory creation is idempotent: re-running a pass tolerates
/// directories that already exist. File creation is not: an existing
/// file is truncated back to zero length on every run.
pub struct Materializer {
    base: PathBuf,
    stack: PathStack,
    report: Report,
}

impl Materializer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            stack: PathStack::default(),
            report: Report::default(),
        }
    }

    /// Consumes the entry records in order, performing their filesystem
    /// effects, and returns the creation counts. The first failing
    /// record aborts the pass; there is no rollback, so entries created
    /// before the failure remain on disk.
    pub async fn materialize(
        mut self,
        entries: impl Iterator<Item = TreeLine>,
    ) -> Result<Report, MaterializeError> {
        for entry in entries {
            self.apply(entry).await?;
        }
        Ok(self.report)
    }

    async fn apply(&mut self, entry: TreeLine) -> Result<(), MaterializeError> {
        let current = self.resolve(&entry)?;

        if entry.is_directory {
            debug!("Creating directory {}", current.best_effort_path_display());
            fs::create_dir_all(&current).await.context(CreateDirSnafu {
                path: current.best_effort_path_display(),
            })?;
            self.stack.record(entry.depth, current);
            self.report.directories += 1;
        } else {
            if let Some(parent) = current.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.context(CreateDirSnafu {
                    path: parent.best_effort_path_display(),
                })?;
            }
            debug!("Creating file {}", current.best_effort_path_display());
            // Create-or-truncate: an existing file loses its contents.
            fs::File::create(&current).await.context(CreateFileSnafu {
                path: current.best_effort_path_display(),
            })?;
            self.report.files += 1;
        }

        Ok(())
    }

    /// Resolves an entry's full path from the base directory and the
    /// ancestor recorded one level above it.
    fn resolve(&self, entry: &TreeLine) -> Result<PathBuf, MaterializeError> {
        if entry.depth == 0 {
            return Ok(self.base.join(&entry.name));
        }
        let parent = self
            .stack
            .ancestor(entry.depth - 1)
            .context(MissingAncestorSnafu {
                name: entry.name.clone(),
                depth: entry.depth,
            })?;
        Ok(parent.join(&entry.name))
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("No ancestor directory declared above '{}' (depth {})", name, depth))]
    MissingAncestorError { name: String, depth: usize },
    #[snafu(display("Failed to create directory: {}", path))]
    CreateDirError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file: {}", path))]
    CreateFileError {
        path: String,
        source: std::io::Error,
    },
}

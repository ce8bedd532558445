use std::io::Read as _;
use std::path::Path;

use colored::Colorize as _;
use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::materializer::{MaterializeError, Materializer};
use crate::parser;

pub struct Application;

impl Application {
    pub async fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        let text = Self::read_input(config.input.as_deref()).await?;
        ensure!(!text.trim().is_empty(), EmptyInputSnafu);

        if config.strict {
            if let Some((line_number, line)) = parser::unrecognized(&text).next() {
                return UnrecognizedLineSnafu {
                    line_number,
                    line: line.to_string(),
                }
                .fail();
            }
        }

        debug!(
            "Materializing under {}",
            config.dest.best_effort_path_display()
        );
        let report = Materializer::new(&config.dest)
            .materialize(parser::parse(&text))
            .await
            .context(MaterializationSnafu)?;
        info!("Materialization finished: {report}");

        println!(
            "{} {} under {}",
            "Created".green().bold(),
            report,
            config.dest.display()
        );

        Ok(())
    }

    async fn read_input(input: Option<&Path>) -> Result<String, ApplicationError> {
        match input {
            Some(path) => {
                debug!("Reading tree text from {}", path.best_effort_path_display());
                let bytes = compio::fs::read(path).await.context(ReadInputSnafu {
                    path: path.best_effort_path_display(),
                })?;
                String::from_utf8(bytes).ok().context(NonUtf8InputSnafu {
                    path: path.best_effort_path_display(),
                })
            }
            None => {
                debug!("Reading tree text from standard input");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context(ReadStdinSnafu)?;
                Ok(text)
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the tree file: {}", path))]
    ReadInputError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read standard input"))]
    ReadStdinError { source: std::io::Error },
    #[snafu(display("Tree file is not valid UTF-8: {}", path))]
    NonUtf8InputError { path: String },
    #[snafu(display("Tree text is empty"))]
    EmptyInputError,
    #[snafu(display("Line {} does not match the tree grammar: {:?}", line_number, line))]
    UnrecognizedLineError { line_number: usize, line: String },
    #[snafu(display("Critical failure encountered during materialization"))]
    MaterializationError { source: MaterializeError },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(input: PathBuf, dest: PathBuf, strict: bool) -> RuntimeConfig {
        RuntimeConfig {
            input: Some(input),
            dest,
            strict,
        }
    }

    fn write_tree_file(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("tree.txt");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[compio::test]
    async fn runs_the_pipeline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let tree_file = write_tree_file(dir.path(), "root/\n├── a/\n│   └── b.txt\n└── c.txt\n");
        let dest = dir.path().join("out");

        Application::run(config(tree_file, dest.clone(), false))
            .await
            .unwrap();

        assert!(dest.join("root/a/b.txt").is_file());
        assert!(dest.join("root/c.txt").is_file());
    }

    #[compio::test]
    async fn rejects_empty_input_before_touching_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let tree_file = write_tree_file(dir.path(), "  \n\n");
        let dest = dir.path().join("out");

        let result = Application::run(config(tree_file, dest.clone(), false)).await;

        assert!(matches!(result, Err(ApplicationError::EmptyInputError)));
        assert!(!dest.exists());
    }

    #[compio::test]
    async fn missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = Application::run(config(
            dir.path().join("nonexistent.txt"),
            dir.path().to_path_buf(),
            false,
        ))
        .await;

        assert!(matches!(result, Err(ApplicationError::ReadInputError { .. })));
    }

    #[compio::test]
    async fn strict_mode_fails_before_creating_anything() {
        let dir = tempfile::tempdir().unwrap();
        let tree_file = write_tree_file(dir.path(), "root/\n│  ├── torn.txt\n└── ok.txt\n");
        let dest = dir.path().join("out");

        let result = Application::run(config(tree_file, dest.clone(), true)).await;

        assert!(matches!(
            result,
            Err(ApplicationError::UnrecognizedLineError { line_number: 2, .. })
        ));
        assert!(!dest.exists());
    }

    #[compio::test]
    async fn default_mode_skips_what_strict_mode_rejects() {
        let dir = tempfile::tempdir().unwrap();
        let tree_file = write_tree_file(dir.path(), "root/\n│  ├── torn.txt\n└── ok.txt\n");
        let dest = dir.path().join("out");

        Application::run(config(tree_file, dest.clone(), false))
            .await
            .unwrap();

        assert!(dest.join("root/ok.txt").is_file());
        assert!(!dest.join("root/torn.txt").exists());
    }
}

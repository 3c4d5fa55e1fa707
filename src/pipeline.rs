//! File-to-file processing
//!
//! Wires the I/O shim to the dispatcher. Paths live here and only here; the
//! dispatcher works on text in, text out.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::io::{self, FileError};
use crate::parallel::{DispatchError, Dispatcher, MAX_CHUNK_SIZE};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("dispatcher task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl PipelineError {
    /// Whether the input file was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, PipelineError::File(FileError::NotFound { .. }))
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub output: PathBuf,
    pub chunks: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Uppercase `input` into `output` using the default dispatcher
pub async fn process_file(input: &Path, output: &Path) -> Result<ProcessSummary, PipelineError> {
    process_file_with(Arc::new(Dispatcher::default()), input, output).await
}

/// Transform `input` into `output` with `dispatcher`
///
/// Nothing is written unless every chunk succeeded.
pub async fn process_file_with(
    dispatcher: Arc<Dispatcher>,
    input: &Path,
    output: &Path,
) -> Result<ProcessSummary, PipelineError> {
    if !io::exists(input).await {
        return Err(FileError::NotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    let text = io::read_text(input).await?;
    let input_bytes = text.len();
    let chunks = text.chars().count().div_ceil(MAX_CHUNK_SIZE);
    tracing::info!("Read {} bytes from {} ({} chunks)", input_bytes, input.display(), chunks);

    // Units block on OS threads; keep the runtime free while they run
    let processed = tokio::task::spawn_blocking(move || dispatcher.process(&text)).await??;

    io::write_text(output, &processed).await?;
    tracing::info!("Wrote {} bytes to {}", processed.len(), output.display());

    Ok(ProcessSummary {
        output: output.to_path_buf(),
        chunks,
        input_bytes,
        output_bytes: processed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::UnitFault;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_process_file_uppercases() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("large-input.txt");
        let output = temp_dir.path().join("processed-output.txt");
        fs::write(&input, "hello world this is a test file").unwrap();

        let summary = process_file(&input, &output).await.unwrap();
        assert_eq!(summary.chunks, 1);
        assert_eq!(summary.output, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "HELLO WORLD THIS IS A TEST FILE"
        );
    }

    #[tokio::test]
    async fn test_process_file_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("nope.txt");
        let output = temp_dir.path().join("out.txt");

        let err = process_file(&input, &output).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("not found"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_process_file_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("empty.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "").unwrap();

        let summary = process_file(&input, &output).await.unwrap();
        assert_eq!(summary.chunks, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[tokio::test]
    async fn test_failed_chunk_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "fine\n".repeat(MAX_CHUNK_SIZE)).unwrap();

        let dispatcher = Dispatcher::new(|s: &str| -> String {
            if s.starts_with("fine") {
                panic!("refusing chunk");
            }
            s.to_string()
        });

        let err = process_file_with(Arc::new(dispatcher), &input, &output)
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
        match err {
            PipelineError::Dispatch(dispatch) => {
                assert_eq!(dispatch.fault(), &UnitFault::Panicked("refusing chunk".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
    }
}

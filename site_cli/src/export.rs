//! Writing the rendered page to disk.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failures while exporting the page.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created
    #[error("failed to create output directory {path}")]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The page could not be written
    #[error("failed to write {path}")]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file name is empty or contains a path separator
    #[error("invalid output file name '{0}' (expected a plain file name like index.html)")]
    InvalidFileName(String),
}

/// Write `html` to `out_dir/file_name`, creating the directory if needed.
pub fn write_page(out_dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, ExportError> {
    validate_file_name(file_name)?;

    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(file_name);
    std::fs::write(&path, html).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path)
}

fn validate_file_name(name: &str) -> Result<(), ExportError> {
    let plain = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(ExportError::InvalidFileName(name.to_string()))
    }
}

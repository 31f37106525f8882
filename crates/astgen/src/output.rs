//! Writing generated code to disk.
//!
//! Output files are created exclusively: an existing file is never
//! truncated or overwritten. A write that fails partway removes the new
//! file, so the path holds either the full text or nothing.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::codegen;
use crate::schema::Grammar;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "expr.rs";

/// Errors that can occur while writing generated code.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("refusing to overwrite existing file {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Create `path` and write `contents` to it.
///
/// Fails with [`OutputError::AlreadyExists`] if anything is already at
/// `path`; the existing file is left as it was.
pub fn write_new<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), OutputError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => OutputError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => OutputError::Create {
                path: path.to_path_buf(),
                source,
            },
        })?;

    finish(path, file, contents, File::sync_all)?;

    info!(path = %path.display(), bytes = contents.len(), "wrote generated code");
    Ok(())
}

/// Write `contents` through `writer`, then `sync` it.
///
/// On failure the writer is dropped and the file at `path` removed.
fn finish<W, S>(path: &Path, mut writer: W, contents: &str, sync: S) -> Result<(), OutputError>
where
    W: Write,
    S: FnOnce(&W) -> io::Result<()>,
{
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .and_then(|()| sync(&writer));
    drop(writer);

    if let Err(source) = written {
        // Only write_new created the file, so it is ours to remove.
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "failed to remove partial output");
        }
        return Err(OutputError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Generate code for `grammar` and write it to a new file at `path`.
pub fn generate_to_file<P: AsRef<Path>>(grammar: &Grammar, path: P) -> Result<(), OutputError> {
    let code = codegen::generate(grammar);
    write_new(path, &code)
}

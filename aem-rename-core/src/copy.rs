use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a copy did not happen.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("'{}' and '{}' are the same file", source_path.display(), destination.display())]
    SameFile {
        source_path: PathBuf,
        destination: PathBuf,
    },

    #[error("failed to copy '{}' to '{}': {source}", source_path.display(), destination.display())]
    Io {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    pub fn io(source_path: &Path, destination: &Path, source: io::Error) -> Self {
        Self::Io {
            source_path: source_path.to_path_buf(),
            destination: destination.to_path_buf(),
            source,
        }
    }
}

/// The copy primitive used by the batch renamer.
///
/// On success the implementation returns the path it actually wrote, which
/// the caller compares against the path it asked for.
pub trait FileCopier {
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<PathBuf, CopyError>;
}

/// Returns true when both paths resolve to the same file on disk.
///
/// A missing path is never the same as anything.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copies file contents through a temporary file in the destination folder.
///
/// The temporary file is persisted with no-clobber semantics, so a
/// destination that appears while the copy is in flight is left untouched
/// and reported as an I/O error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl FsCopier {
    pub fn new() -> Self {
        Self
    }
}

impl FileCopier for FsCopier {
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<PathBuf, CopyError> {
        if is_same_file(source, destination) {
            return Err(CopyError::SameFile {
                source_path: source.to_path_buf(),
                destination: destination.to_path_buf(),
            });
        }

        let dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut reader = fs::File::open(source).map_err(|e| CopyError::io(source, destination, e))?;
        let mut staged =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| CopyError::io(source, destination, e))?;

        io::copy(&mut reader, staged.as_file_mut())
            .map_err(|e| CopyError::io(source, destination, e))?;

        // Carry the permission bits over like a plain copy would.
        let permissions = reader
            .metadata()
            .map_err(|e| CopyError::io(source, destination, e))?
            .permissions();
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| CopyError::io(source, destination, e))?;

        staged
            .persist_noclobber(destination)
            .map_err(|e| CopyError::io(source, destination, e.error))?;

        Ok(destination.to_path_buf())
    }
}

//! Small filesystem helpers for setup code: existence checks, opening files for
//! writing, scratch directories, and locating the home and working directories.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

#[derive(thiserror::Error, Debug)]
pub enum FsError {
    #[error("creating temp directory '{prefix}*': {source}")]
    TempDir {
        prefix: String,
        #[source]
        source: io::Error,
    },

    #[error("home directory could not be determined")]
    HomeDirUnavailable,

    #[error("reading working directory: {0}")]
    WorkingDir(#[source] io::Error),
}

/// Returns true if anything (file, directory, ...) exists at `path`. Symlinks are followed.
///
/// Every failure to stat the path, including permission errors, is reported as `false`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns true if a directory exists at `path`. Failures are reported as `false`.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Opens the file at `path` for reading and writing, creating it if it does not exist.
///
/// An existing file is not truncated. Parent directories are not created. The file is
/// closed when the returned handle is dropped.
pub fn open_or_create_file(path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    let existed = file_exists(path);

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)?;

    if existed {
        trace!("opened existing file {}", path.display());
    } else {
        debug!("created file {}", path.display());
    }

    Ok(file)
}

/// Creates a new, uniquely named directory under the system temp directory and returns
/// its path. The directory name starts with `prefix`.
///
/// The directory is not removed automatically; that is left to the caller.
pub fn temp_dir(prefix: &str) -> Result<PathBuf, FsError> {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .map_err(|source| FsError::TempDir {
            prefix: prefix.to_string(),
            source,
        })?;

    let path = dir.keep();
    debug!("created temp directory {}", path.display());
    Ok(path)
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf, FsError> {
    let base_dirs = directories::BaseDirs::new().ok_or(FsError::HomeDirUnavailable)?;
    let home = base_dirs.home_dir();
    if home.as_os_str().is_empty() {
        return Err(FsError::HomeDirUnavailable);
    }
    Ok(home.to_path_buf())
}

/// The process's current working directory.
pub fn working_dir() -> Result<PathBuf, FsError> {
    std::env::current_dir().map_err(FsError::WorkingDir)
}

/// Expands a leading `~` to the home directory and makes the result absolute against
/// the working directory. Symlinks are not resolved and the path need not exist.
///
/// `~user` forms are left alone. An empty path stays empty.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf, FsError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(PathBuf::new());
    }

    let expanded = match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home_dir()?,
        Ok(rest) => home_dir()?.join(rest),
        Err(_) => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(working_dir()?.join(expanded))
    }
}

use crate::error::{Error, Result};
use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the whole file into memory. The file handle is closed before this returns.
///
/// A missing file is reported as `Error::NotFound`, anything else as `Error::Unexpected`.
pub(crate) fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e)
            .context(format!("Unable to read file {}", path.display()))
            .map_err(Error::from),
    }
}

//! Output files that appear only when complete.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use trine_common::utils::error::Result;

const WRITE_BUFFER: usize = 1 << 20;

/// Writes `path` through a temporary sibling file that is renamed into place
/// once `write` succeeds and the buffer is flushed.
///
/// On failure the temporary file is removed and `path` is left untouched.
///
/// # Errors
///
/// Returns the error of `write`, or an I/O error from creating, flushing or
/// renaming the file.
pub fn write_atomically<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let tmp = temp_path(path);
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER, File::create(&tmp)?);

    let result = write(&mut writer).and_then(|value| {
        writer.flush()?;
        Ok(value)
    });
    drop(writer);

    match result {
        Ok(value) => {
            fs::rename(&tmp, path)?;
            debug!(path = %path.display(), "wrote file");
            Ok(value)
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp);
            Err(err)
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

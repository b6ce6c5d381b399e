//! Destination file output

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExportError, ExportResult};

/// Write `bytes` to `path`, replacing any existing file.
///
/// Missing parent directories are created. The handle is flushed explicitly
/// and closed when it goes out of scope, on success and on error.
pub fn write_output(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ExportError::io(path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.svg");
        write_output(&path, b"<svg/>").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<svg/>");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        fs::write(&path, b"a much longer previous document").unwrap();
        write_output(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn directory_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        match write_output(dir.path(), b"data") {
            Err(ExportError::Io { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

//! Archive packaging for produced package directories.

use crate::error::PackageError;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::path::Path;

/// Writes a gzip-compressed tarball of `package_dir` to `archive_path`.
///
/// The archive's entries are rooted at the package directory's own name, so
/// unpacking recreates `<name>/...` rather than spilling files into the
/// current directory.
pub fn create_tgz(package_dir: &Path, archive_path: &Path) -> Result<(), PackageError> {
    let root_name = package_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package".to_string());

    let file =
        File::create(archive_path).map_err(|source| PackageError::io(archive_path, source))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder
        .append_dir_all(&root_name, package_dir)
        .map_err(|source| PackageError::io(package_dir, source))?;

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .map_err(|source| PackageError::io(archive_path, source))?;

    Ok(())
}

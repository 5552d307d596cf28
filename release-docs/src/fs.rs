//! Whole-file writes.

use std::fs::Permissions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replaces the contents of `path` with `contents`.
///
/// The data is written to a temporary file in the destination directory and
/// renamed over the target, so readers never observe a half-written file.
/// An existing target keeps its permissions; a new one is created
/// world-readable (`0644` on Unix).
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created, written or
/// moved into place.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => new_file_permissions(),
        Err(e) => return Err(e),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    // The temporary file is created owner-only.
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.md");
        fs::write(&path, "old content that is longer").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fresh.md");

        write_atomic(&path, "content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content\n");
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn keeps_permissions_of_existing_file() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o664)).unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(mode(&path), 0o664);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        write_atomic(&path, "content\n").unwrap();

        assert_eq!(mode(&path), 0o644);
    }
}

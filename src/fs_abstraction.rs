//! Filesystem abstraction layer for testability
//!
//! The allowlist operations take a [`FileSystem`] so that read and write
//! failures can be injected in tests. Uses mockall for mock generation in
//! test builds.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

#[cfg(test)]
use mockall::automock;

/// Filesystem operations needed to read and rewrite an allowlist.
///
/// # Example (testing)
/// ```ignore
/// use allowlist_filter::fs_abstraction::MockFileSystem;
///
/// let mut mock_fs = MockFileSystem::new();
/// mock_fs.expect_read()
///     .returning(|_| Ok(b"10.0.0.1\n".to_vec()));
/// ```
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read file contents as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write bytes to a file, creating or truncating it.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Replace a file through a temporary sibling and a rename.
    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation using std::fs.
#[derive(Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        // The temp file must live on the same filesystem for rename to be atomic
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent_dir)?;

        temp_file.write_all(contents)?;
        temp_file.as_file().sync_all()?;

        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_real_fs_read_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("allow_list.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"10.0.0.1\n").unwrap();

        assert_eq!(fs.read(&file_path).unwrap(), b"10.0.0.1\n");
    }

    #[test]
    fn test_real_fs_write_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("allow_list.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"10.0.0.1\n10.0.0.2\n10.0.0.3\n").unwrap();
        fs.write(&file_path, b"10.0.0.2\n").unwrap();

        assert_eq!(fs.read(&file_path).unwrap(), b"10.0.0.2\n");
    }

    #[test]
    fn test_real_fs_write_atomic_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("allow_list.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"old content that is longer\n").unwrap();
        fs.write_atomic(&file_path, b"new\n").unwrap();

        assert_eq!(fs.read(&file_path).unwrap(), b"new\n");

        // No temp files left behind
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_real_fs_write_atomic_creates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("fresh.txt");

        let fs = RealFileSystem;
        assert!(!fs.exists(&file_path));
        fs.write_atomic(&file_path, b"1.1.1.1\n").unwrap();

        assert_eq!(fs.read(&file_path).unwrap(), b"1.1.1.1\n");
    }

    #[test]
    fn test_real_fs_write_atomic_missing_dir() {
        let fs = RealFileSystem;
        let result = fs.write_atomic(Path::new("/nonexistent/path/file.txt"), b"x");
        assert!(result.is_err());
    }

    #[test]
    fn test_real_fs_read_nonexistent() {
        let fs = RealFileSystem;
        let result = fs.read(Path::new("/nonexistent/path/file.txt"));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_write_to_nonexistent_dir() {
        let fs = RealFileSystem;
        let result = fs.write(Path::new("/nonexistent/path/file.txt"), b"test");
        assert!(result.is_err());
    }

    #[test]
    fn test_real_fs_static_instance() {
        assert!(!real_fs().exists(Path::new("/nonexistent/path")));
    }

    #[test]
    fn test_mock_fs_error_simulation() {
        let mut mock = MockFileSystem::new();
        mock.expect_read().returning(|_| {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access denied",
            ))
        });

        let result = mock.read(Path::new("/any/path"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }
}

//! Atomic file write operations.
//!
//! The generated file is written to a temporary file in the target directory
//! and renamed over the destination, so readers see either the previous file
//! or the complete new one. The temporary file is removed if any step fails.
//!
//! The result keeps the permissions of the file it replaces. A new file is
//! created `0o666` less the process umask, like any other file the build
//! writes.

use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

/// Write `content` to `path` atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let existing = existing_permissions(path);

    let mut builder = Builder::new();
    builder.prefix(".tagsync-");
    if existing.is_none() {
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_file = builder.tempfile_in(&parent)?;
    if let Some(permissions) = existing {
        // Set after creation so the umask cannot narrow the copied mode
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path)?;

    Ok(())
}

fn existing_permissions(path: &Path) -> Option<Permissions> {
    std::fs::metadata(path)
        .ok()
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.permissions())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("update_tags_gen.rs");

        atomic_write(&file_path, "fn f() {}\n").unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "fn f() {}\n");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("update_tags_gen.rs");
        std::fs::write(&file_path, "initial").unwrap();

        atomic_write(&file_path, "updated").unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "updated");
    }

    #[test]
    fn test_atomic_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("src/generated/update_tags_gen.rs");

        atomic_write(&file_path, "content").unwrap();
        assert!(file_path.is_file());
    }

    #[test]
    fn test_atomic_write_no_leftover_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("update_tags_gen.rs");

        atomic_write(&file_path, "content").unwrap();

        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1, "Should only have the target file, no temp files");
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_mode_of_replaced_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("update_tags_gen.rs");
        std::fs::write(&file_path, "initial").unwrap();
        set_mode(&file_path, 0o644);

        atomic_write(&file_path, "updated").unwrap();
        assert_eq!(mode(&file_path), 0o644);

        set_mode(&file_path, 0o640);
        atomic_write(&file_path, "again").unwrap();
        assert_eq!(mode(&file_path), 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_new_file_gets_default_mode() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("update_tags_gen.rs");

        // Compare against an ordinary file so the test holds under any umask
        let reference = temp_dir.path().join("reference");
        std::fs::write(&reference, "x").unwrap();

        atomic_write(&file_path, "content").unwrap();
        assert_eq!(mode(&file_path), mode(&reference));
    }

    #[test]
    fn test_atomic_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let result = atomic_write(&blocker.join("update_tags_gen.rs"), "content");
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "x");
    }
}

//! Atomic output writes.
//!
//! The prompt is written to a temporary file in the target's directory,
//! synced, then renamed over the target. A failed write never leaves a
//! truncated output file; at worst a stray `.{name}.{pid}.tmp` remains after
//! a crash. `std::fs::rename` replaces an existing target on every platform we
//! build for.
//!
//! An output path that is a symlink is written through: the link stays and
//! the file it points at is replaced.

use crate::error::{PromptError, Result};
use log::debug;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let target = resolve_symlink(path);

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| PromptError::filesystem(parent, e))?;
    }

    let temp_path = temp_path_for(&target)?;
    debug!(
        "writing {} bytes to '{}' via '{}'",
        content.len(),
        target.display(),
        temp_path.display()
    );

    if let Err(err) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(PromptError::filesystem(path, err));
    }

    if let Err(err) = fs::rename(&temp_path, &target) {
        let _ = fs::remove_file(&temp_path);
        return Err(PromptError::filesystem(path, err));
    }

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// The file a write to `path` should replace.
///
/// A symlink resolves to its destination, even a dangling one, so the rename
/// lands on the linked file instead of swapping out the link itself.
fn resolve_symlink(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return path.to_path_buf();
    }

    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    match fs::read_link(path) {
        // Relative link destinations are relative to the link's directory.
        Ok(dest) => match path.parent() {
            Some(parent) => parent.join(dest),
            None => dest,
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Temporary sibling of `target`: `.{filename}.{pid}.tmp`.
///
/// Built from the raw `OsStr` so non-UTF-8 file names are accepted.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target.file_name().ok_or_else(|| {
        PromptError::filesystem(
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;

    let mut temp_name = OsString::from(".");
    temp_name.push(filename);
    temp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(target.with_file_name(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");

        atomic_write_file(&file_path, "### SYSTEM\nhello\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "### SYSTEM\nhello\n");
    }

    #[test]
    fn test_atomic_write_overwrites_silently() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");
        fs::write(&file_path, "a much longer original content than the replacement").unwrap();

        atomic_write(&file_path, b"short").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dirs").join("prompt.md");

        atomic_write(&file_path, b"nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prompt.md");

        atomic_write(&file_path, b"content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("prompt.md")]);
    }

    #[test]
    fn test_atomic_write_into_directory_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("occupied");
        fs::create_dir(&dir_path).unwrap();

        let err = atomic_write(&dir_path, b"content").unwrap_err();
        match err {
            PromptError::Filesystem { path, .. } => assert_eq!(path, dir_path),
            other => panic!("expected Filesystem error, got {:?}", other),
        }

        // The directory is untouched and the temp file was cleaned up.
        assert!(dir_path.is_dir());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/path/prompt.md")).unwrap();

        assert_eq!(temp.parent().unwrap(), Path::new("/some/path"));
        let name = temp.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(".prompt.md."));
        assert!(name.ends_with(".tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(OsStr::from_bytes(b"pr\xffompt.md"));

        atomic_write_file(&file_path, "x").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.md");
        let link = temp_dir.path().join("link.md");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink("real.md", &link).unwrap();

        atomic_write_file(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_through_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("link.md");
        std::os::unix::fs::symlink("out/real.md", &link).unwrap();

        atomic_write_file(&link, "created").unwrap();

        let real = temp_dir.path().join("out").join("real.md");
        assert_eq!(fs::read_to_string(&real).unwrap(), "created");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[test]
    fn test_temp_path_rejects_bare_root() {
        assert!(temp_path_for(Path::new("/")).is_err());
    }
}

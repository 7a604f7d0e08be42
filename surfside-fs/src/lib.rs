//! Capability-based file helpers for Surfside tooling.
//!
//! Paths are UTF-8 (`camino`) and every operation goes through `cap-std`
//! directory handles opened with ambient authority.
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file into a `String`.
///
/// # Errors
/// Fails when the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the directory containing `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or the directory cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Report whether `path` names a regular file.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when nothing exists at `path`, and
/// other I/O errors when it cannot be inspected.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    Ok(dir.metadata(name.as_str())?.is_file())
}

/// Create every missing ancestor directory of `path`.
///
/// # Errors
/// Propagates I/O errors from directory creation.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_root(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Write `contents` to `path`, creating parent directories and truncating
/// any existing file.
///
/// # Errors
/// Propagates I/O errors from directory creation or the write.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    let mut file = dir.create(name.as_str())?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// Split `dir` into an opened base directory and the remainder below it.
fn split_root(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let (base, relative) = match std_dir.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let drive = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(drive).join(std::path::MAIN_SEPARATOR_STR);
            let relative = dir
                .strip_prefix(&base)
                .or_else(|_| dir.strip_prefix(drive))
                .map_err(|_| io::Error::other(format!("cannot strip {drive} from {dir}")))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR);
            let relative = dir
                .strip_prefix(&base)
                .map_err(|_| io::Error::other(format!("cannot strip root from {dir}")))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), dir.to_path_buf()),
    };
    let opened = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((opened, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn writes_and_reads_nested_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("reports/today/conditions.json");

        write_utf8_file(&path, "{\"ok\":true}").expect("write file");

        assert_eq!(read_utf8_file(&path).expect("read file"), "{\"ok\":true}");
        assert!(file_is_file(&path).expect("inspect file"));
    }

    #[rstest]
    fn overwrites_existing_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("out.json");

        write_utf8_file(&path, "a much longer first payload").expect("first write");
        write_utf8_file(&path, "short").expect("second write");

        assert_eq!(read_utf8_file(&path).expect("read file"), "short");
    }

    #[rstest]
    fn directories_are_not_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("nested");
        ensure_parent_dir(&path.join("child")).expect("create directory");

        assert!(!file_is_file(&path).expect("inspect directory"));
    }

    #[rstest]
    fn missing_files_report_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn rejects_paths_without_file_names() {
        assert!(open_dir_and_file(Utf8Path::new("/")).is_err());
    }
}

//! Capability-based file output for Wayfinder artefacts.
//!
//! Paths given on the command line may be absolute or relative. `cap-std`
//! only opens paths relative to a directory capability, so every write is
//! split into an ambient base directory (the filesystem root, a Windows
//! drive prefix, or the current directory) and a relative remainder.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::{Component, Path};

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
///
/// Returns an error if `path` has no file name, a parent directory cannot be
/// created, or the file cannot be written.
///
/// # Examples
/// ```
/// # fn main() -> std::io::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let root = camino::Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
///     .map_err(|_| std::io::Error::other("non-UTF-8 temp dir"))?;
/// let target = root.join("maps/route.html");
///
/// wayfinder_fs::write_file(&target, "<html></html>")?;
/// assert_eq!(std::fs::read_to_string(&target)?, "<html></html>");
/// # Ok(())
/// # }
/// ```
pub fn write_file(path: &Utf8Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_parent(path)?;
    dir.write(file_name, contents)
}

/// Ensure the parent directory for `path` exists.
///
/// # Errors
///
/// Returns an error if the base directory cannot be opened or the missing
/// directories cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }

    let (base, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Open the parent of `path` and return it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split `dir` into an ambient base directory capability and the path
/// remaining beneath it.
///
/// # Errors
///
/// Returns an error if the base directory cannot be opened or `dir` is not
/// valid UTF-8 once its prefix is removed.
pub fn base_dir_and_relative(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let (base, relative) = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR);
            let relative = strip(std_dir, base.as_std_path())
                .or_else(|_| strip(std_dir, Path::new(prefix)))?;
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR);
            let relative = strip(std_dir, base.as_std_path())?;
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), dir.to_path_buf()),
    };

    let base_dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((base_dir, relative))
}

fn strip(path: &Path, prefix: &Path) -> io::Result<Utf8PathBuf> {
    let remainder = path
        .strip_prefix(prefix)
        .map_err(|_| io::Error::other(format!("{} is not under {}", path.display(), prefix.display())))?;
    Utf8PathBuf::from_path_buf(remainder.to_path_buf())
        .map_err(|_| io::Error::other("non-UTF-8 path"))
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
    fn write_file_creates_missing_parents(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("a/b/map.html");

        write_file(&target, "first").expect("write should succeed");

        assert_eq!(std::fs::read_to_string(&target).expect("read back"), "first");
    }

    #[rstest]
    fn write_file_replaces_existing_contents(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("map.html");

        write_file(&target, "a much longer first version").expect("first write");
        write_file(&target, "second").expect("second write");

        assert_eq!(std::fs::read_to_string(&target).expect("read back"), "second");
    }

    #[rstest]
    fn write_file_rejects_directory_targets(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = write_file(&root.join(".."), "x").expect_err("no file name");
        assert!(err.to_string().contains("does not name a file"));
    }

    #[rstest]
    fn absolute_paths_split_at_the_root(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let (_base, relative) = base_dir_and_relative(&root).expect("split");
        assert!(relative.is_relative());
        assert!(root.as_str().ends_with(relative.as_str()));
    }

    #[rstest]
    fn relative_paths_resolve_from_current_dir() {
        let (_base, relative) =
            base_dir_and_relative(Utf8Path::new("out/maps")).expect("split");
        assert_eq!(relative, Utf8PathBuf::from("out/maps"));
    }
}

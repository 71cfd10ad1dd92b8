use super::*;
use std::fs::File;
use tempfile::tempdir;

fn walk(root: &Path) -> Vec<PathBuf> {
    SourceFiles::new(root, "gleam")
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(walk(dir.path()).is_empty());
}

#[test]
fn test_filters_by_extension() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.gleam")).unwrap();
    File::create(dir.path().join("b.gleam")).unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();
    File::create(dir.path().join("a.gleam.bak")).unwrap();

    let mut files = walk(dir.path());
    files.sort();
    assert_eq!(
        files,
        vec![dir.path().join("a.gleam"), dir.path().join("b.gleam")]
    );
}

#[test]
fn test_recurses_into_subdirectories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("util").join("deep");
    fs::create_dir_all(&nested).unwrap();
    File::create(dir.path().join("root.gleam")).unwrap();
    File::create(nested.join("leaf.gleam")).unwrap();

    let files = walk(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files.contains(&nested.join("leaf.gleam")));
}

#[test]
fn test_directories_named_like_sources_are_not_yielded() {
    let dir = tempdir().unwrap();
    let odd = dir.path().join("weird.gleam");
    fs::create_dir(&odd).unwrap();
    File::create(odd.join("inner.gleam")).unwrap();

    assert_eq!(walk(dir.path()), vec![odd.join("inner.gleam")]);
}

#[test]
fn test_subtree_yielded_before_next_sibling() {
    let dir = tempdir().unwrap();
    for sub in ["a", "b"] {
        let path = dir.path().join(sub);
        fs::create_dir(&path).unwrap();
        File::create(path.join("one.gleam")).unwrap();
        File::create(path.join("two.gleam")).unwrap();
    }

    let files = walk(dir.path());
    assert_eq!(files.len(), 4);
    // Whatever order the platform lists them in, each directory's files are contiguous.
    assert_eq!(files[0].parent(), files[1].parent());
    assert_eq!(files[2].parent(), files[3].parent());
    assert_ne!(files[1].parent(), files[2].parent());
}

#[test]
fn test_missing_root_reports_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let mut files = SourceFiles::new(&missing, "gleam");
    let err = files.next().unwrap().unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(files.next().is_none());
}

#[test]
fn test_is_lazy() {
    let dir = tempdir().unwrap();
    for i in 0..5 {
        File::create(dir.path().join(format!("f{i}.gleam"))).unwrap();
    }

    let mut files = SourceFiles::new(dir.path(), "gleam");
    assert!(files.next().is_some());
    assert_eq!(files.count(), 4);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_followed() {
    let dir = tempdir().unwrap();
    let real = dir.path().join("real");
    fs::create_dir(&real).unwrap();
    File::create(real.join("only.gleam")).unwrap();
    std::os::unix::fs::symlink(dir.path(), real.join("loop")).unwrap();

    assert_eq!(walk(dir.path()), vec![real.join("only.gleam")]);
}

#[cfg(unix)]
#[test]
fn test_walk_continues_past_unreadable_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    let open = dir.path().join("open");
    fs::create_dir(&locked).unwrap();
    fs::create_dir(&open).unwrap();
    File::create(locked.join("hidden.gleam")).unwrap();
    File::create(open.join("a.gleam")).unwrap();
    File::create(dir.path().join("top.gleam")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let results: Vec<_> = SourceFiles::new(dir.path(), "gleam").collect();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].io_kind(),
        Some(std::io::ErrorKind::PermissionDenied)
    );

    let mut files: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
    files.sort();
    assert_eq!(
        files,
        vec![open.join("a.gleam"), dir.path().join("top.gleam")]
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_sources() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9.gleam");
    File::create(dir.path().join(name)).unwrap();
    File::create(dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"))).unwrap();

    assert_eq!(walk(dir.path()), vec![dir.path().join(name)]);
}

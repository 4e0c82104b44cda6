use super::*;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn exts(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|e| e.to_string()).collect()
}

fn names(matched: &FileMatch, root: &Path) -> Vec<String> {
    let root = std::path::absolute(root).unwrap();
    matched
        .files
        .iter()
        .map(|f| f.path.strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_normalize_extension() {
    assert_eq!(normalize_extension("zip").as_deref(), Some(".zip"));
    assert_eq!(normalize_extension(".ZIP").as_deref(), Some(".zip"));
    assert_eq!(normalize_extension("  .7z ").as_deref(), Some(".7z"));
    assert_eq!(normalize_extension(""), None);
    assert_eq!(normalize_extension("."), None);
}

#[test]
fn test_extension_of() {
    assert_eq!(extension_of(Path::new("Game.ZIP")).as_deref(), Some(".zip"));
    assert_eq!(extension_of(Path::new("a.tar.gz")).as_deref(), Some(".gz"));
    assert_eq!(extension_of(Path::new("README")), None);
    assert_eq!(extension_of(Path::new(".hidden")), None);
}

#[test]
fn test_selection_only_normalizes() {
    let selection = ExtensionSelection::only(["ZIP", ".7z", "", "zip"]);
    assert_eq!(selection, ExtensionSelection::Only(exts(&[".7z", ".zip"])));
}

#[test]
fn test_scan_extensions_sorted_and_lowercased() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("b.ZIP"));
    touch(&dir.path().join("a.zip"));
    touch(&dir.path().join("nested").join("c.SFC"));
    touch(&dir.path().join("nested").join("deep").join("d.7z"));
    touch(&dir.path().join("noext"));

    let scan = scan_extensions(dir.path()).unwrap();

    assert_eq!(scan.extensions, vec![".7z", ".sfc", ".zip"]);
    assert!(!scan.is_partial());
}

#[test]
fn test_scan_extensions_empty_tree() {
    let dir = tempfile::tempdir().unwrap();
    let scan = scan_extensions(dir.path()).unwrap();
    assert!(scan.extensions.is_empty());
}

#[test]
fn test_scan_missing_root_is_invalid_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_extensions(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, GamelistError::InvalidPath { .. }));
}

#[test]
fn test_scan_file_root_is_invalid_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.zip");
    touch(&file);
    let err = scan_extensions(&file).unwrap_err();
    assert!(matches!(err, GamelistError::InvalidPath { .. }));
}

#[test]
fn test_match_files_empty_set_is_invalid_input() {
    // The root does not exist: the empty set must be rejected before any traversal.
    let err = match_files(Path::new("/definitely/not/here"), &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, GamelistError::InvalidInput(_)));
}

#[test]
fn test_match_files_filters_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.zip"));
    touch(&dir.path().join("B.ZIP"));
    touch(&dir.path().join("c.txt"));
    touch(&dir.path().join("sub").join("d.zip"));

    let matched = match_files(dir.path(), &exts(&[".zip"])).unwrap();

    assert_eq!(names(&matched, dir.path()), vec!["B.ZIP", "a.zip", "sub/d.zip"]);
}

#[test]
fn test_match_files_no_matches_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("c.txt"));

    let matched = match_files(dir.path(), &exts(&[".zip"])).unwrap();

    assert!(matched.files.is_empty());
}

#[test]
fn test_match_files_records_canonical_identity() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.zip"));

    let matched = match_files(dir.path(), &exts(&[".zip"])).unwrap();

    assert_eq!(
        matched.files[0].canonical,
        fs::canonicalize(dir.path().join("a.zip")).unwrap()
    );
}

#[cfg(unix)]
#[test]
fn test_match_files_each_file_once_despite_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("a.zip"));
    touch(&root.join("sub").join("b.zip"));
    std::os::unix::fs::symlink(root, root.join("sub").join("back")).unwrap();
    std::os::unix::fs::symlink(root.join("sub"), root.join("alias")).unwrap();

    let matched = match_files(root, &exts(&[".zip"])).unwrap();

    assert_eq!(matched.files.len(), 2);
    let canonical: HashSet<_> = matched.files.iter().map(|f| f.canonical.clone()).collect();
    assert_eq!(canonical.len(), 2);
}

#[cfg(unix)]
#[test]
fn test_resolve_root_keeps_symlinked_name() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("boxart");
    fs::create_dir(&real).unwrap();
    let link = dir.path().join("images");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let resolved = resolve_root(&link).unwrap();

    assert_eq!(resolved.file_name(), Some(std::ffi::OsStr::new("images")));
    assert!(resolved.is_absolute());
}

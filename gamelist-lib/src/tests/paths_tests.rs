use super::*;
use std::path::PathBuf;

#[test]
fn test_descendant_gets_root_marker() {
    let path = relative_path(Path::new("/roms/snes/a.zip"), Path::new("/roms/snes"));
    assert_eq!(path.as_deref(), Some("./a.zip"));
}

#[test]
fn test_nested_descendant_uses_forward_slashes() {
    let file: PathBuf = ["/roms", "snes", "hacks", "b.zip"].iter().collect();
    let path = relative_path(&file, Path::new("/roms/snes"));
    assert_eq!(path.as_deref(), Some("./hacks/b.zip"));
}

#[test]
fn test_non_descendant_is_none() {
    assert_eq!(
        relative_path(Path::new("/images/a.png"), Path::new("/roms/snes")),
        None
    );
    // A shared name prefix is not containment.
    assert_eq!(
        relative_path(Path::new("/roms/snes2/a.png"), Path::new("/roms/snes")),
        None
    );
}

#[test]
fn test_synthesized_uses_foreign_root_name() {
    let path = synthesized_path(Path::new("/media/covers/a.png"), Path::new("/media/covers"));
    assert_eq!(path, "./covers/a.png");
}

#[test]
fn test_synthesized_discards_intermediate_dirs() {
    let path = synthesized_path(Path::new("/media/covers/usa/a.png"), Path::new("/media/covers"));
    assert_eq!(path, "./covers/a.png");
}

#[test]
fn test_synthesized_against_filesystem_root() {
    assert_eq!(synthesized_path(Path::new("/a.png"), Path::new("/")), "./a.png");
}

#[test]
fn test_normalize_prefers_relative() {
    let path = normalize_path(
        Path::new("/roms/snes/images/a.png"),
        Path::new("/roms/snes"),
        Path::new("/roms/snes/images"),
    );
    assert_eq!(path, "./images/a.png");
}

#[test]
fn test_normalize_falls_back() {
    let path = normalize_path(
        Path::new("/media/covers/a.png"),
        Path::new("/roms/snes"),
        Path::new("/media/covers"),
    );
    assert_eq!(path, "./covers/a.png");
}

#[test]
fn test_normalize_is_idempotent_and_marked() {
    let cases = [
        ("/roms/a.zip", "/roms", "/roms"),
        ("/roms/x/y/z.zip", "/roms", "/roms"),
        ("/elsewhere/a.png", "/roms", "/elsewhere"),
    ];
    for (file, root, foreign) in cases {
        let first = normalize_path(Path::new(file), Path::new(root), Path::new(foreign));
        let second = normalize_path(Path::new(file), Path::new(root), Path::new(foreign));
        assert_eq!(first, second);
        assert!(first.starts_with(ROOT_MARKER), "{first}");
    }
}

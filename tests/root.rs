extern crate winpathclass;

use winpathclass::classify::classify_root_parts;
use winpathclass::{
    classify_root, classify_root_wide, is_path_absolute, is_path_rooted, is_path_unc, ParseFlags,
    PathClassification,
};

const NO_FLAGS: ParseFlags = ParseFlags::empty();

#[test]
fn test_root_forms() {
    for &(path, kind, root) in &[
        ("", PathClassification::Empty, ""),
        ("file.txt", PathClassification::Relative, ""),
        ("/usr", PathClassification::SlashRooted, "/"),
        ("\\dir", PathClassification::SlashRooted, "\\"),
        ("C:", PathClassification::DriveLetterRelative, "C:"),
        ("z:dir", PathClassification::DriveLetterRelative, "z:"),
        ("C:\\foo\\bar", PathClassification::DriveLetterRooted, "C:\\"),
        ("C:/foo", PathClassification::DriveLetterRooted, "C:/"),
        ("\\\\server\\share\\dir", PathClassification::UncRooted, "\\\\server\\share\\"),
        ("\\\\server\\\\dir", PathClassification::UncRooted, "\\\\server\\\\"),
        ("\\\\?\\C:\\x", PathClassification::DriveLetterRooted, "\\\\?\\C:\\"),
        ("\\\\?\\UNC\\srv\\shr\\d", PathClassification::UncRooted, "\\\\?\\UNC\\srv\\shr\\"),
        ("\\\\?\\relative", PathClassification::Relative, "\\\\?\\"),
        ("~", PathClassification::Relative, ""),
    ] {
        assert_eq!(classify_root(path, NO_FLAGS), (kind, root), "{:?}", path);
    }
}

#[test]
fn test_root_failures() {
    // No valid split point, so the whole input is the root.
    assert_eq!(
        classify_root("\\\\server", NO_FLAGS),
        (PathClassification::UncIncomplete, "\\\\server"),
    );
    assert_eq!(
        classify_root("\\\\server\\share", NO_FLAGS),
        (PathClassification::UncIncomplete, "\\\\server\\share"),
    );
    assert_eq!(
        classify_root("\\\\?\\UNC\\srv", NO_FLAGS),
        (PathClassification::UncIncomplete, "\\\\?\\UNC\\srv"),
    );

    assert_eq!(classify_root("\\\\\\x", NO_FLAGS), (PathClassification::Invalid, ""));
    assert_eq!(classify_root("\\\\", NO_FLAGS), (PathClassification::Invalid, ""));
    assert_eq!(classify_root("\\\\1host\\share\\x", NO_FLAGS), (PathClassification::Invalid, ""));
}

#[test]
fn test_root_ignores_remainder() {
    // Only the root is examined.
    assert_eq!(classify_root("a<b", NO_FLAGS), (PathClassification::Relative, ""));
    assert_eq!(classify_root("C:\\\\x", NO_FLAGS), (PathClassification::DriveLetterRooted, "C:\\"));
}

#[test]
fn test_root_home() {
    let flags = ParseFlags::RECOGNISE_TILDE_HOME;
    assert_eq!(classify_root("~", flags), (PathClassification::HomeRooted, "~"));
    assert_eq!(classify_root("~\\x", flags), (PathClassification::HomeRooted, "~"));
    assert_eq!(classify_root("~x", flags), (PathClassification::Relative, ""));
}

#[test]
fn test_root_parts() {
    let root = classify_root_parts(b"\\\\?\\C:\\x", NO_FLAGS);
    assert_eq!(root.kind, PathClassification::DriveLetterRooted);
    assert_eq!(root.remainder, 7);
    assert_eq!(root.prefix_len, 4);
    assert!(root.is_long_path_prefixed);
    assert_eq!(root.first_invalid, None);

    let root = classify_root_parts(b"\\\\?\\UNC\\srv\\shr\\", NO_FLAGS);
    assert_eq!(root.kind, PathClassification::UncRooted);
    assert_eq!(root.remainder, 16);
    assert_eq!(root.prefix_len, 8);

    let root = classify_root_parts(b"/", NO_FLAGS);
    assert_eq!(root.kind, PathClassification::SlashRooted);
    assert_eq!(root.remainder, 1);
    assert_eq!(root.prefix_len, 0);
    assert!(!root.is_long_path_prefixed);

    let root = classify_root_parts(b"\\\\\\foo", NO_FLAGS);
    assert_eq!(root.kind, PathClassification::Invalid);
    assert_eq!(root.remainder, 0);
    assert_eq!(root.first_invalid, Some(2));

    let root = classify_root_parts(b"\\\\srv", NO_FLAGS);
    assert_eq!(root.kind, PathClassification::UncIncomplete);
    assert_eq!(root.first_invalid, None);
}

#[test]
fn test_root_wide() {
    let path: Vec<u16> = "C:\\Windows\\notepad.exe".encode_utf16().collect();
    let (kind, root) = classify_root_wide(&path, NO_FLAGS);
    assert_eq!(kind, PathClassification::DriveLetterRooted);
    assert_eq!(root, &path[..3]);

    let path: Vec<u16> = "\\\\server".encode_utf16().collect();
    let (kind, root) = classify_root_wide(&path, NO_FLAGS);
    assert_eq!(kind, PathClassification::UncIncomplete);
    assert_eq!(root, &path[..]);
}

#[test]
fn test_predicates() {
    assert!(is_path_rooted("\\foo"));
    assert!(is_path_rooted("/foo"));
    assert!(is_path_rooted("C:\\foo"));
    assert!(is_path_rooted("\\\\server\\share\\"));
    assert!(!is_path_rooted("C:foo"));
    assert!(!is_path_rooted("foo"));
    assert!(!is_path_rooted("~"));
    assert!(!is_path_rooted(""));

    assert!(is_path_absolute("C:\\"));
    assert!(is_path_absolute("\\\\?\\C:\\x"));
    assert!(is_path_absolute("\\\\server\\share\\x"));
    assert!(!is_path_absolute("\\foo"));
    assert!(!is_path_absolute("C:foo"));
    assert!(!is_path_absolute("\\\\server"));

    assert!(is_path_unc("\\\\s\\h\\"));
    assert!(is_path_unc("\\\\?\\UNC\\s\\h\\x"));
    assert!(!is_path_unc("\\\\s\\h"));
    assert!(!is_path_unc("C:\\x"));
}

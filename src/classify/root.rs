/*!
Root classification.

This determines only how a path *begins*.  It never looks past the root, other than to scan a UNC server and share.
*/
use crate::encoding::Unit;
use crate::flags::ParseFlags;

use super::results::{PathClassification, RootClassification};
use super::unc::find_unc_server_and_share;

const LONG_PATH_PREFIX: &[u8] = br"\\?\";
const LONG_UNC_PREFIX: &[u8] = br"\\?\UNC\";

/// Shortest double-backslash input that can be anything other than `Invalid`.
const MIN_DOUBLE_BACKSLASH_LEN: usize = 5;

/**
Classifies the root of `units`.

The first match wins, in this order: a `/`; a `~` (only with `RECOGNISE_TILDE_HOME`); a `\`, which is either a slash root or the start of a UNC or long-path form; a drive specification; and finally, nothing at all.

# Panics

In debug builds, if `units` is empty (the caller is expected to have dealt with that as `Empty`), or if `flags` carries unrecognised bits.
*/
pub fn classify_root_parts<U>(units: &[U], flags: ParseFlags) -> RootClassification where U: Unit {
    debug_assert!(!units.is_empty(), "root classification of an empty path");
    debug_assert!(ParseFlags::all().contains(flags), "unrecognised parse flags: {:?}", flags);

    let first = units[0];

    if first.is_forward_slash() {
        return RootClassification::new(PathClassification::SlashRooted, 1);
    }

    if first.is(b'~')
        && flags.contains(ParseFlags::RECOGNISE_TILDE_HOME)
        && (units.len() == 1 || units[1].is_separator())
    {
        return RootClassification::new(PathClassification::HomeRooted, 1);
    }

    if first.is_backslash() {
        if units.len() > 1 && units[1].is_backslash() {
            return classify_double_backslash(units);
        }
        return RootClassification::new(PathClassification::SlashRooted, 1);
    }

    match detect_drive(units, 0) {
        Some(root) => root,
        None => RootClassification::new(PathClassification::Relative, 0),
    }
}

/**
`units` begins with `\\`.
*/
fn classify_double_backslash<U>(units: &[U]) -> RootClassification where U: Unit {
    if units.len() < MIN_DOUBLE_BACKSLASH_LEN {
        return RootClassification::invalid(if units.len() > 2 { 2 } else { 1 });
    }

    if starts_with(units, LONG_UNC_PREFIX) {
        let base = LONG_UNC_PREFIX.len();
        let root = match find_unc_server_and_share(&units[base..]) {
            Ok(parts) => RootClassification::new(PathClassification::UncRooted, base + parts.directory),
            Err(_) => RootClassification::new(PathClassification::UncIncomplete, base),
        };
        return root.long_path(base);
    }

    if starts_with(units, LONG_PATH_PREFIX) {
        return classify_after_long_path_prefix(units).long_path(LONG_PATH_PREFIX.len());
    }

    // Short-form server names start with a letter.
    if units[2].is_alpha() {
        return match find_unc_server_and_share(&units[2..]) {
            Ok(parts) => RootClassification::new(PathClassification::UncRooted, 2 + parts.directory),
            Err(_) => RootClassification::new(PathClassification::UncIncomplete, 0),
        };
    }

    RootClassification::invalid(2)
}

/**
`units` begins with `\\?\` (but not `\\?\UNC\`).  What follows is classified afresh: first as a UNC server and share, then as a drive, and otherwise as relative to the prefix.
*/
fn classify_after_long_path_prefix<U>(units: &[U]) -> RootClassification where U: Unit {
    let base = LONG_PATH_PREFIX.len();

    if let Ok(parts) = find_unc_server_and_share(&units[base..]) {
        return RootClassification::new(PathClassification::UncRooted, base + parts.directory);
    }

    match detect_drive(units, base) {
        Some(root) => root,
        None => RootClassification::new(PathClassification::Relative, base),
    }
}

/**
Looks for `X:` at `units[base..]`.  A following separator makes the drive rooted, and is part of the root.
*/
fn detect_drive<U>(units: &[U], base: usize) -> Option<RootClassification> where U: Unit {
    let rest = &units[base..];

    if rest.len() < 2 || !rest[0].is_alpha() || !rest[1].is_colon() {
        return None;
    }

    let root = match rest.get(2) {
        Some(u) if u.is_separator() => RootClassification::new(PathClassification::DriveLetterRooted, base + 3),
        _ => RootClassification::new(PathClassification::DriveLetterRelative, base + 2),
    };
    Some(root)
}

fn starts_with<U>(units: &[U], ascii: &[u8]) -> bool where U: Unit {
    units.len() >= ascii.len()
        && units.iter().zip(ascii).all(|(&u, &c)| u.is(c))
}

/*!
Path classification.

A path is classified in two passes.  The first (`root`) works out how the path begins, and how much of it the root occupies.  The second walks the rest of the path exactly once, looking for invalid characters and separator runs, and noting where the last separator and the last dot are.  Everything else falls out of those positions.

Neither pass allocates, and neither performs any I/O: this is purely a question of syntax.  In particular, `.` and `..` segments are not resolved.
*/
use tracing::{debug, trace};

use crate::encoding::Unit;
use crate::flags::ParseFlags;
use crate::util::UnitsDisplay;

pub mod root;
pub mod unc;
mod results;

pub use self::results::{Classification, PathClassification, RootClassification, Span};
pub use self::root::classify_root_parts;
pub use self::unc::{find_unc_server_and_share, UncError, UncParts};

/**
Classifies and decomposes a path.

The returned kind describes the form of the root, unless the path is malformed, in which case it is one of the failure kinds and no decomposition is available.  See `Classification` for what each part contains.
*/
pub fn classify_units<U>(units: &[U], flags: ParseFlags) -> Classification<U> where U: Unit {
    debug_assert!(ParseFlags::all().contains(flags), "unrecognised parse flags: {:?}", flags);

    let mut results = Classification::new(units);

    if units.is_empty() {
        trace!(len = 0, kind = ?PathClassification::Empty, "classified path");
        return results;
    }

    let root = classify_root_parts(units, flags);
    results.is_long_path_prefixed = root.is_long_path_prefixed;

    if root.kind.is_failure() {
        results.kind = root.kind;
        results.first_invalid = root.first_invalid.map(|at| Span::new(at, 1));
        debug!(
            path = %UnitsDisplay(units),
            kind = ?root.kind,
            at = ?root.first_invalid,
            "path root is malformed"
        );
        return results;
    }

    let remainder = root.remainder;

    if !flags.contains(ParseFlags::IGNORE_INVALID_CHARS) {
        let invalid = units[remainder..]
            .iter()
            .position(|&u| u.is_always_invalid() || u.is_colon());
        if let Some(at) = invalid {
            return fail(results, PathClassification::InvalidChars, remainder + at);
        }
    }

    // Start on the root's own trailing separators, if it has any, so that a
    // run spanning the end of the root is caught and the root counts as a part.
    let scan_from = units[..remainder]
        .iter()
        .rposition(|u| !u.is_separator())
        .map_or(0, |last| last + 1);
    let reject_forward_slashes = root.is_long_path_prefixed
        && !flags.contains(ParseFlags::IGNORE_INVALID_CHARS_IN_LONG_PATH);
    let tolerate_runs = flags.contains(ParseFlags::IGNORE_INVALID_SLASH_RUNS);

    let mut last_backslash = None;
    let mut last_forward_slash = None;
    let mut last_dot = None;
    let mut run_len = 0usize;
    let mut num_parts = 0usize;

    for (at, &u) in units.iter().enumerate().skip(scan_from) {
        match u.to_ascii() {
            Some(b'/') | Some(b'\\') => {
                let is_forward = u.is_forward_slash();
                if is_forward && reject_forward_slashes {
                    return fail(results, PathClassification::InvalidChars, at);
                }
                if run_len != 0 && !tolerate_runs {
                    return fail(results, PathClassification::InvalidSlashRuns, at);
                }

                if is_forward {
                    last_forward_slash = Some(at);
                } else {
                    last_backslash = Some(at);
                }
                last_dot = None;
                if run_len == 0 {
                    num_parts += 1;
                }
                run_len += 1;
            },
            Some(b'.') => {
                last_dot = Some(at);
                run_len = 0;
            },
            _ => run_len = 0,
        }
    }

    let len = units.len();
    let entry = match last_backslash.max(last_forward_slash) {
        Some(last_slash) => Span::new(last_slash + 1, len - (last_slash + 1)),
        None => Span::new(remainder, len - remainder),
    };

    let mut stem = entry;
    let mut extension = Span::new(len, 0);
    if let Some(dot) = last_dot {
        if !is_dots_directory(entry.slice(units)) {
            extension = Span::new(dot, len - dot);
            stem.len -= extension.len;
        }
    }

    let location = Span::new(0, len - entry.len);

    results.kind = root.kind;
    results.prefix = Span::new(0, root.prefix_len);
    results.root = Span::new(0, remainder);
    results.location = location;
    results.directory = Span::new(remainder, location.len - remainder);
    results.entry = entry;
    results.stem = stem;
    results.extension = extension;
    results.num_directory_parts = num_parts;

    trace!(
        len = len,
        flags = ?flags,
        kind = ?results.kind,
        parts = num_parts,
        "classified path"
    );
    results
}

fn fail<U>(mut results: Classification<U>, kind: PathClassification, at: usize) -> Classification<U> where U: Unit {
    debug!(
        path = %UnitsDisplay(results.input),
        kind = ?kind,
        at = at,
        "path contains invalid units"
    );
    results.kind = kind;
    results.first_invalid = Some(Span::new(at, 1));
    results
}

/// `.` or `..`
fn is_dots_directory<U>(entry: &[U]) -> bool where U: Unit {
    match entry.len() {
        1 | 2 => entry.iter().all(|u| u.is_dot()),
        _ => false,
    }
}

/**
Classifies only the root of a path, without decomposing the rest.

For `UncIncomplete`, which has no valid split point, the root is the whole input.  For the other failure kinds it is empty.
*/
pub fn classify_root_units<U>(units: &[U], flags: ParseFlags) -> (PathClassification, Span) where U: Unit {
    if units.is_empty() {
        return (PathClassification::Empty, Span::EMPTY);
    }

    let root = classify_root_parts(units, flags);
    let span = match root.kind {
        PathClassification::UncIncomplete => Span::new(0, units.len()),
        PathClassification::Invalid => Span::EMPTY,
        _ => Span::new(0, root.remainder),
    };
    trace!(len = units.len(), kind = ?root.kind, root_len = span.len, "classified path root");
    (root.kind, span)
}

/**
Classifies and decomposes a UTF-8 path.
*/
pub fn classify(path: &str, flags: ParseFlags) -> Classification<u8> {
    classify_units(path.as_bytes(), flags)
}

/**
Classifies and decomposes a UTF-16 path, such as one obtained from `OsStrExt::encode_wide`.
*/
pub fn classify_wide(path: &[u16], flags: ParseFlags) -> Classification<u16> {
    classify_units(path, flags)
}

/**
Classifies the root of a UTF-8 path, returning it as a sub-slice of `path`.
*/
pub fn classify_root(path: &str, flags: ParseFlags) -> (PathClassification, &str) {
    let (kind, span) = classify_root_units(path.as_bytes(), flags);
    // Root boundaries always follow an ASCII unit, or fall at either end.
    (kind, &path[..span.end()])
}

pub fn classify_root_wide(path: &[u16], flags: ParseFlags) -> (PathClassification, &[u16]) {
    let (kind, span) = classify_root_units(path, flags);
    (kind, span.slice(path))
}

/**
Returns `true` if `path` has a slash, drive, or UNC root.  `~` is not recognised.
*/
pub fn is_path_rooted(path: &str) -> bool {
    classify_root_units(path.as_bytes(), ParseFlags::empty()).0.is_rooted()
}

/**
Returns `true` if `path` is drive-rooted or UNC-rooted.
*/
pub fn is_path_absolute(path: &str) -> bool {
    classify_root_units(path.as_bytes(), ParseFlags::empty()).0.is_absolute()
}

/**
Returns `true` if `path` begins with a complete `\\server\share\`, with or without a long-path prefix.
*/
pub fn is_path_unc(path: &str) -> bool {
    classify_root_units(path.as_bytes(), ParseFlags::empty()).0 == PathClassification::UncRooted
}

/*!
UNC server and share detection.
*/
use std::fmt;

use crate::encoding::Unit;

/**
The positions, relative to the start of the scanned slice, of the parts of a complete `server\share\` lead-in.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UncParts {
    pub server: usize,
    pub share: usize,
    /// The first unit after the separator which ends the share.  Equal to the slice length when the path stops there.
    pub directory: usize,
}

/**
Why a slice does not begin with a complete `server\share\`.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UncError {
    /// Nothing precedes the first `\`, or there is nothing at all.
    EmptyServer,
    /// A `:` appeared; drive specifications cannot be disguised as UNC paths.
    Colon { at: usize },
    /// The slice ends inside the server name.
    MissingShare,
    /// The slice ends inside the share name, without the separator that completes it.
    Unterminated { share: usize },
}

impl fmt::Display for UncError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UncError::EmptyServer => write!(fmt, "empty server name"),
            UncError::Colon { at } => write!(fmt, "colon at offset {}", at),
            UncError::MissingShare => write!(fmt, "no share name"),
            UncError::Unterminated { share } => write!(fmt, "share at offset {} is not terminated", share),
        }
    }
}

impl ::std::error::Error for UncError {}

/**
Scans for `server\share\` at the start of `units`, which should begin immediately after the leading `\\` (or after a `\\?\` or `\\?\UNC\` prefix).

Only `\` ends the server name; either separator ends the share name.

# Failure

See `UncError`.  In particular, `\\server\share` with nothing after the share is *not* complete: there is no position at which a directory could begin.
*/
pub fn find_unc_server_and_share<U>(units: &[U]) -> Result<UncParts, UncError> where U: Unit {
    match units.first() {
        None => return Err(UncError::EmptyServer),
        Some(u) if u.is_backslash() => return Err(UncError::EmptyServer),
        Some(_) => (),
    }

    // Capture slots, filled in order: server, share, directory.
    let mut slots = [0usize; 3];
    let mut filled = 1;

    for (at, &u) in units.iter().enumerate() {
        if u.is_colon() {
            return Err(UncError::Colon { at: at });
        }

        let ends_segment = if filled == 1 { u.is_backslash() } else { u.is_separator() };
        if !ends_segment {
            continue;
        }

        slots[filled] = at + 1;
        filled += 1;

        if filled == slots.len() {
            return Ok(UncParts {
                server: slots[0],
                share: slots[1],
                directory: slots[2],
            });
        }
    }

    if filled == 2 {
        Err(UncError::Unterminated { share: slots[1] })
    } else {
        Err(UncError::MissingShare)
    }
}

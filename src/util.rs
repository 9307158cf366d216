use std::char;
use std::fmt;

use crate::encoding::Unit;

/**
Renders a unit slice for diagnostics.

This is lossy: ASCII units are written as-is, and anything else becomes U+FFFD.  It exists so that paths of any width can appear in `Debug` output and log fields without first being transcoded.
*/
pub struct UnitsDisplay<'a, U: 'a>(pub &'a [U]);

impl<'a, U> fmt::Display for UnitsDisplay<'a, U> where U: Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use std::fmt::Write;

        for &unit in self.0 {
            let c = match unit.to_ascii() {
                Some(c) => char::from(c),
                None => char::REPLACEMENT_CHARACTER,
            };
            fmt.write_char(c)?;
        }
        Ok(())
    }
}

impl<'a, U> fmt::Debug for UnitsDisplay<'a, U> where U: Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "\"{}\"", self)
    }
}

/**
Counts the units before the first zero unit.

# Safety

`ptr` must be non-null and point to a sequence of units terminated by a zero unit.
*/
pub unsafe fn zero_terminated_len<U>(ptr: *const U) -> usize where U: Unit {
    let mut len = 0;
    let mut cur = ptr;

    while !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    len
}

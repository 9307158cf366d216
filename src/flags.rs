use bitflags::bitflags;

use crate::error::FlagsError;

bitflags! {
    /// Optional leniencies for the classifier.  All are off by default.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParseFlags: u32 {
        /// Treat a leading `~` (alone, or followed by a separator) as a
        /// home-directory root.
        const RECOGNISE_TILDE_HOME = 1 << 0;
        /// Skip the scan for `< > | ? * "` and stray `:`.
        const IGNORE_INVALID_CHARS = 1 << 1;
        /// Tolerate runs of consecutive separators.
        const IGNORE_INVALID_SLASH_RUNS = 1 << 2;
        /// Tolerate `/` inside a `\\?\`-prefixed path.
        const IGNORE_INVALID_CHARS_IN_LONG_PATH = 1 << 3;
    }
}

impl ParseFlags {
    /// Validates a raw flags word, as received over the C ABI or from
    /// configuration.
    pub fn from_raw(bits: u32) -> Result<Self, FlagsError> {
        ParseFlags::from_bits(bits).ok_or(FlagsError::UnrecognisedBits(bits & !ParseFlags::all().bits()))
    }
}

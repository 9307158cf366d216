use std::fmt::{self, Debug};
use std::str;

use crate::encoding::Unit;
use crate::error::ClassificationError;
use crate::util::UnitsDisplay;

/**
The syntactic form of a path, or the reason it could not be classified.

The discriminants are stable; they are what the C entry points return.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PathClassification {
    /// Zero-length input.
    Empty = 0,
    /// A double-backslash lead-in that matches no recognised form.
    Invalid = 1,
    /// One of `< > | ? * "`, or a `:` outside a drive specification.
    InvalidChars = 2,
    /// Two or more consecutive separators.
    InvalidSlashRuns = 3,
    /// No root at all: `dir\file.ext`.
    Relative = 4,
    /// `\dir` or `/dir`.
    SlashRooted = 5,
    /// `C:` or `C:dir`.
    DriveLetterRelative = 6,
    /// `C:\dir`.
    DriveLetterRooted = 7,
    /// `\\server\share\dir`.
    UncRooted = 8,
    /// `\\server` or `\\server\share`, lacking the separator after the share.
    UncIncomplete = 9,
    /// `~` or `~\dir`, when `RECOGNISE_TILDE_HOME` is set.
    HomeRooted = 10,
}

impl PathClassification {
    /**
    Returns `true` for the outcomes after which no decomposition is available.
    */
    pub fn is_failure(self) -> bool {
        match self {
            PathClassification::Empty
            | PathClassification::Invalid
            | PathClassification::InvalidChars
            | PathClassification::InvalidSlashRuns
            | PathClassification::UncIncomplete => true,
            _ => false,
        }
    }

    /**
    Returns `true` if the path begins at some root rather than the current directory (or the current directory of a drive).
    */
    pub fn is_rooted(self) -> bool {
        match self {
            PathClassification::SlashRooted
            | PathClassification::DriveLetterRooted
            | PathClassification::UncRooted
            | PathClassification::HomeRooted => true,
            _ => false,
        }
    }

    /**
    Returns `true` if the path names the same location regardless of any current directory or drive.
    */
    pub fn is_absolute(self) -> bool {
        match self {
            PathClassification::DriveLetterRooted | PathClassification::UncRooted => true,
            _ => false,
        }
    }
}

/**
A non-owning `(offset, length)` view into the classified input, measured in units.
*/
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub const EMPTY: Span = Span { offset: 0, len: 0 };

    #[inline]
    pub fn new(offset: usize, len: usize) -> Self {
        Span { offset: offset, len: len }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /**
    Applies this span to `units`.

    # Panics

    If the span lies outside `units`.  Spans produced by the classifier always lie within the input they were produced from.
    */
    #[inline]
    pub fn slice<'a, U>(&self, units: &'a [U]) -> &'a [U] {
        &units[self.offset..self.end()]
    }
}

/**
The output of the root classifier: how the path begins, and where the rest of it starts.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RootClassification {
    pub kind: PathClassification,
    /// Offset of the first unit after the root.  The remainder always runs to the end of the input.
    pub remainder: usize,
    /// Length of a `\\?\` or `\\?\UNC\` prefix; zero if there is none.
    pub prefix_len: usize,
    pub is_long_path_prefixed: bool,
    /// Offset of the offending unit, for `Invalid`.
    pub first_invalid: Option<usize>,
}

impl RootClassification {
    pub(crate) fn new(kind: PathClassification, remainder: usize) -> Self {
        RootClassification {
            kind: kind,
            remainder: remainder,
            prefix_len: 0,
            is_long_path_prefixed: false,
            first_invalid: None,
        }
    }

    pub(crate) fn invalid(at: usize) -> Self {
        RootClassification {
            first_invalid: Some(at),
            ..RootClassification::new(PathClassification::Invalid, 0)
        }
    }

    pub(crate) fn long_path(self, prefix_len: usize) -> Self {
        RootClassification {
            prefix_len: prefix_len,
            is_long_path_prefixed: true,
            ..self
        }
    }
}

/**
The complete decomposition of a path.

Every part is a view into the original input; nothing is copied.  For every non-failure outcome:

- `prefix`, then the rest of `root`, then `directory`, then `entry` reconstruct `input` exactly;
- `stem` followed by `extension` reconstructs `entry` exactly.

For failure outcomes only `input`, `kind` and (for the `Invalid*` family) `first_invalid` are meaningful; every other part is empty.
*/
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Classification<'a, U: 'a> {
    pub(crate) kind: PathClassification,
    pub(crate) input: &'a [U],
    pub(crate) prefix: Span,
    pub(crate) root: Span,
    pub(crate) location: Span,
    pub(crate) directory: Span,
    pub(crate) entry: Span,
    pub(crate) stem: Span,
    pub(crate) extension: Span,
    pub(crate) first_invalid: Option<Span>,
    pub(crate) num_directory_parts: usize,
    pub(crate) is_long_path_prefixed: bool,
}

impl<'a, U> Classification<'a, U> where U: Unit {
    pub(crate) fn new(input: &'a [U]) -> Self {
        Classification {
            kind: PathClassification::Empty,
            input: input,
            prefix: Span::EMPTY,
            root: Span::EMPTY,
            location: Span::EMPTY,
            directory: Span::EMPTY,
            entry: Span::EMPTY,
            stem: Span::EMPTY,
            extension: Span::EMPTY,
            first_invalid: None,
            num_directory_parts: 0,
            is_long_path_prefixed: false,
        }
    }

    pub fn kind(&self) -> PathClassification {
        self.kind
    }

    pub fn input(&self) -> &'a [U] {
        self.input
    }

    /// The `\\?\` or `\\?\UNC\` prefix.
    pub fn prefix(&self) -> &'a [U] {
        self.prefix.slice(self.input)
    }

    /// The prefix plus the drive specification, slash, home marker or UNC `\\server\share\`.
    pub fn root(&self) -> &'a [U] {
        self.root.slice(self.input)
    }

    /// Everything up to and including the last separator.
    pub fn location(&self) -> &'a [U] {
        self.location.slice(self.input)
    }

    /// `location` without the root.
    pub fn directory(&self) -> &'a [U] {
        self.directory.slice(self.input)
    }

    /// The final component; empty if the path ends in a separator.
    pub fn entry(&self) -> &'a [U] {
        self.entry.slice(self.input)
    }

    pub fn stem(&self) -> &'a [U] {
        self.stem.slice(self.input)
    }

    /// The last `.` of `entry` and everything after it.  Always empty for `.` and `..`.
    pub fn extension(&self) -> &'a [U] {
        self.extension.slice(self.input)
    }

    /// The offending unit, for the `Invalid*` family.
    pub fn first_invalid(&self) -> Option<&'a [U]> {
        self.first_invalid.map(|span| span.slice(self.input))
    }

    pub fn prefix_span(&self) -> Span { self.prefix }
    pub fn root_span(&self) -> Span { self.root }
    pub fn location_span(&self) -> Span { self.location }
    pub fn directory_span(&self) -> Span { self.directory }
    pub fn entry_span(&self) -> Span { self.entry }
    pub fn stem_span(&self) -> Span { self.stem }
    pub fn extension_span(&self) -> Span { self.extension }
    pub fn first_invalid_span(&self) -> Option<Span> { self.first_invalid }

    /**
    The number of separator-terminated segments in `location` past the drive or server, counting a root separator as one segment.
    */
    pub fn num_directory_parts(&self) -> usize {
        self.num_directory_parts
    }

    pub fn is_long_path_prefixed(&self) -> bool {
        self.is_long_path_prefixed
    }

    /**
    Turns a failure outcome into an error, passing every other outcome through unchanged.
    */
    pub fn check(self) -> Result<Self, ClassificationError> {
        let at = self.first_invalid.map_or(0, |span| span.offset);
        match self.kind {
            PathClassification::Empty => Err(ClassificationError::Empty),
            PathClassification::Invalid => Err(ClassificationError::Invalid { at: at }),
            PathClassification::InvalidChars => Err(ClassificationError::InvalidChars { at: at }),
            PathClassification::InvalidSlashRuns => Err(ClassificationError::InvalidSlashRuns { at: at }),
            PathClassification::UncIncomplete => Err(ClassificationError::UncIncomplete),
            _ => Ok(self),
        }
    }
}

/**
Views of byte-unit classifications as `str`.

These return `None` only when the input was not valid UTF-8 to begin with: every span boundary the classifier produces falls immediately after an ASCII unit (or at either end of the input), so it is always a character boundary.
*/
impl<'a> Classification<'a, u8> {
    pub fn to_str(&self, span: Span) -> Option<&'a str> {
        str::from_utf8(span.slice(self.input)).ok()
    }

    pub fn root_str(&self) -> Option<&'a str> {
        self.to_str(self.root)
    }

    pub fn directory_str(&self) -> Option<&'a str> {
        self.to_str(self.directory)
    }

    pub fn entry_str(&self) -> Option<&'a str> {
        self.to_str(self.entry)
    }

    pub fn stem_str(&self) -> Option<&'a str> {
        self.to_str(self.stem)
    }

    pub fn extension_str(&self) -> Option<&'a str> {
        self.to_str(self.extension)
    }
}

impl<'a, U> Debug for Classification<'a, U> where U: Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Classification")
            .field("kind", &self.kind)
            .field("input", &UnitsDisplay(self.input))
            .field("prefix", &self.prefix)
            .field("root", &self.root)
            .field("location", &self.location)
            .field("directory", &self.directory)
            .field("entry", &self.entry)
            .field("stem", &self.stem)
            .field("extension", &self.extension)
            .field("first_invalid", &self.first_invalid)
            .field("num_directory_parts", &self.num_directory_parts)
            .field("is_long_path_prefixed", &self.is_long_path_prefixed)
            .finish()
    }
}

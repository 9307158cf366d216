/*!
Code unit types and traits.

The classifier never decodes its input.  Every decision it makes is about one of a handful of ASCII characters, and in every encoding this crate supports those characters occupy exactly one unit and never appear inside a multi-unit sequence.  So a unit only ever needs to answer one question: "which ASCII character are you, if any?"
*/
use libc::{c_char, wchar_t};

/**
Characters which may never appear in a path outside of its prefix.

`:` is handled separately, since it *is* permitted as part of a drive specification.
*/
static ALWAYS_INVALID: [u8; 6] = [b'<', b'>', b'|', b'?', b'*', b'"'];

macro_rules! naive_unit_impl {
    ($ty_name:ident) => {
        impl Unit for $ty_name {
            #[inline]
            fn is_zero(&self) -> bool {
                self.0 == 0
            }

            #[inline]
            fn to_ascii(self) -> Option<u8> {
                ascii_of(self.0 as u32)
            }
        }
    };
}

macro_rules! prim_unit_impl {
    ($ty_name:ty) => {
        impl Unit for $ty_name {
            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn to_ascii(self) -> Option<u8> {
                ascii_of(self as u32)
            }
        }
    };
}

#[inline]
fn ascii_of(value: u32) -> Option<u8> {
    if value < 0x80 {
        Some(value as u8)
    } else {
        None
    }
}

/**
Abstracts over the different widths of string a path may be supplied in.

In practice, this will be implemented by a marker type (which is not intended to actually be instantiated anywhere), along with a concrete type that implements `Unit`.
*/
pub trait Encoding {
    type Unit: Unit;
    type FfiUnit;

    /**
    Returns a string which can be used to identify this encoding in debug and log output.
    */
    fn debug_prefix() -> &'static str;
}

/**
A single code unit of a path string.

Only `to_ascii` needs to be provided; the classification predicates are all defined in terms of it.  Units outside the ASCII range are ordinary path characters as far as the classifier is concerned.
*/
pub trait Unit: Copy {
    /// Marks the end of a zero-terminated string.
    fn is_zero(&self) -> bool;

    /**
    Returns the unit's value if it lies in the ASCII range, and `None` otherwise.
    */
    fn to_ascii(self) -> Option<u8>;

    #[inline]
    fn is(self, c: u8) -> bool {
        self.to_ascii() == Some(c)
    }

    /**
    `\` or `/`.
    */
    #[inline]
    fn is_separator(self) -> bool {
        match self.to_ascii() {
            Some(b'\\') | Some(b'/') => true,
            _ => false,
        }
    }

    #[inline]
    fn is_backslash(self) -> bool {
        self.is(b'\\')
    }

    #[inline]
    fn is_forward_slash(self) -> bool {
        self.is(b'/')
    }

    #[inline]
    fn is_dot(self) -> bool {
        self.is(b'.')
    }

    #[inline]
    fn is_colon(self) -> bool {
        self.is(b':')
    }

    #[inline]
    fn is_alpha(self) -> bool {
        self.to_ascii().map_or(false, |c| c.is_ascii_alphabetic())
    }

    /**
    One of `< > | ? * "`.
    */
    #[inline]
    fn is_always_invalid(self) -> bool {
        match self.to_ascii() {
            Some(c) => ALWAYS_INVALID.contains(&c),
            None => false,
        }
    }
}

prim_unit_impl! { u8 }
prim_unit_impl! { u16 }

/**
Paths in the current C runtime multibyte encoding, as passed through `*const c_char`.
*/
pub enum MultiByte {}

impl Encoding for MultiByte {
    type Unit = MbUnit;
    type FfiUnit = c_char;

    fn debug_prefix() -> &'static str { "Mb" }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct MbUnit(pub c_char);

naive_unit_impl! { MbUnit }

/**
Paths in the C runtime wide encoding, as passed through `*const wchar_t`.  This is UTF-16 on Windows.
*/
pub enum Wide {}

impl Encoding for Wide {
    type Unit = WUnit;
    type FfiUnit = wchar_t;

    fn debug_prefix() -> &'static str { "W" }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct WUnit(pub wchar_t);

naive_unit_impl! { WUnit }

/*!
C-callable entry points.

Each function comes in an `_a` flavour over `c_char` and a `_w` flavour over `wchar_t`, with the path passed as a (pointer, length) pair.  The `_za`/`_zw` flavours instead take a zero-terminated string.

All results are (pointer, length) pairs into the caller's buffer; none of them is zero-terminated, and the caller must keep the buffer alive for as long as it uses them.

Each function returns the `PathClassification` discriminant on success, or one of the negative `WINPATHCLASS_E_*` codes.
*/
use std::ptr;
use std::slice;

use libc::{c_char, c_int, wchar_t};
use tracing::warn;

use crate::classify::{classify_root_units, classify_units, Classification, Span};
use crate::encoding::{Encoding, MultiByte, Unit, Wide};
use crate::flags::ParseFlags;
use crate::util::zero_terminated_len;

/// The flags word carried bits outside the recognised mask.
pub const WINPATHCLASS_E_FLAGS: c_int = -1;
/// A required pointer was null.  A null path is only accepted with a zero length.
pub const WINPATHCLASS_E_NULL: c_int = -2;

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct FfiSlice<C> {
    pub ptr: *const C,
    pub len: usize,
}

impl<C> FfiSlice<C> {
    fn null() -> Self {
        FfiSlice {
            ptr: ptr::null(),
            len: 0,
        }
    }

    fn of(base: *const C, span: Span) -> Self {
        FfiSlice {
            ptr: base.wrapping_add(span.offset),
            len: span.len,
        }
    }
}

/**
The C layout of `Classification`.  `first_invalid` has a null pointer unless the classification is one of the `Invalid*` kinds.
*/
#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub struct FfiResults<C> {
    pub kind: c_int,
    pub input: FfiSlice<C>,
    pub prefix: FfiSlice<C>,
    pub root: FfiSlice<C>,
    pub location: FfiSlice<C>,
    pub directory: FfiSlice<C>,
    pub entry: FfiSlice<C>,
    pub stem: FfiSlice<C>,
    pub extension: FfiSlice<C>,
    pub first_invalid: FfiSlice<C>,
    pub num_directory_parts: usize,
    pub is_long_path_prefixed: c_int,
}

impl<C> FfiResults<C> {
    fn empty() -> Self {
        FfiResults {
            kind: 0,
            input: FfiSlice::null(),
            prefix: FfiSlice::null(),
            root: FfiSlice::null(),
            location: FfiSlice::null(),
            directory: FfiSlice::null(),
            entry: FfiSlice::null(),
            stem: FfiSlice::null(),
            extension: FfiSlice::null(),
            first_invalid: FfiSlice::null(),
            num_directory_parts: 0,
            is_long_path_prefixed: 0,
        }
    }

    fn from_classification<U>(base: *const C, c: &Classification<U>) -> Self where U: Unit {
        FfiResults {
            kind: c.kind() as c_int,
            input: FfiSlice::of(base, Span::new(0, c.input().len())),
            prefix: FfiSlice::of(base, c.prefix_span()),
            root: FfiSlice::of(base, c.root_span()),
            location: FfiSlice::of(base, c.location_span()),
            directory: FfiSlice::of(base, c.directory_span()),
            entry: FfiSlice::of(base, c.entry_span()),
            stem: FfiSlice::of(base, c.stem_span()),
            extension: FfiSlice::of(base, c.extension_span()),
            first_invalid: match c.first_invalid_span() {
                Some(span) => FfiSlice::of(base, span),
                None => FfiSlice::null(),
            },
            num_directory_parts: c.num_directory_parts(),
            is_long_path_prefixed: c.is_long_path_prefixed() as c_int,
        }
    }
}

pub type FfiResultsA = FfiResults<c_char>;
pub type FfiResultsW = FfiResults<wchar_t>;

/**
Re-borrows a foreign (pointer, length) pair as units.

Every `Encoding::Unit` in this crate is a `#[repr(C)]` newtype over its `FfiUnit`, so the cast preserves layout.
*/
unsafe fn borrow_units<'a, E>(ptr: *const E::FfiUnit, len: usize) -> Option<&'a [E::Unit]> where E: Encoding {
    if ptr.is_null() {
        if len == 0 { Some(&[]) } else { None }
    } else {
        Some(slice::from_raw_parts(ptr as *const E::Unit, len))
    }
}

fn parse_flags<E>(bits: u32) -> Option<ParseFlags> where E: Encoding {
    match ParseFlags::from_raw(bits) {
        Ok(flags) => Some(flags),
        Err(err) => {
            warn!(encoding = E::debug_prefix(), error = %err, "rejected parse flags");
            None
        }
    }
}

unsafe fn classify_raw<E>(
    path: *const E::FfiUnit,
    len: usize,
    flags: u32,
    results: *mut FfiResults<E::FfiUnit>,
) -> c_int
where
    E: Encoding,
{
    if results.is_null() {
        return WINPATHCLASS_E_NULL;
    }
    *results = FfiResults::empty();

    let flags = match parse_flags::<E>(flags) {
        Some(flags) => flags,
        None => return WINPATHCLASS_E_FLAGS,
    };
    let units = match borrow_units::<E>(path, len) {
        Some(units) => units,
        None => return WINPATHCLASS_E_NULL,
    };

    let c = classify_units(units, flags);
    *results = FfiResults::from_classification(path, &c);
    c.kind() as c_int
}

unsafe fn classify_root_raw<E>(
    path: *const E::FfiUnit,
    len: usize,
    flags: u32,
    root: *mut FfiSlice<E::FfiUnit>,
) -> c_int
where
    E: Encoding,
{
    if root.is_null() {
        return WINPATHCLASS_E_NULL;
    }
    *root = FfiSlice::null();

    let flags = match parse_flags::<E>(flags) {
        Some(flags) => flags,
        None => return WINPATHCLASS_E_FLAGS,
    };
    let units = match borrow_units::<E>(path, len) {
        Some(units) => units,
        None => return WINPATHCLASS_E_NULL,
    };

    let (kind, span) = classify_root_units(units, flags);
    *root = FfiSlice::of(path, span);
    kind as c_int
}

/**
Classifies and decomposes `len` units of `path`.

# Safety

`path` must be null (with `len` zero) or valid for reads of `len` units.  `results` must be null or valid for writes.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_a(
    path: *const c_char,
    len: usize,
    flags: u32,
    results: *mut FfiResultsA,
) -> c_int {
    classify_raw::<MultiByte>(path, len, flags, results)
}

/**
The `wchar_t` sibling of `winpathclass_classify_a`.

# Safety

As for `winpathclass_classify_a`.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_w(
    path: *const wchar_t,
    len: usize,
    flags: u32,
    results: *mut FfiResultsW,
) -> c_int {
    classify_raw::<Wide>(path, len, flags, results)
}

/**
Classifies and decomposes a zero-terminated `path`.  The terminator is not part of the input.

# Safety

`path` must be null or point to a zero-terminated string.  `results` must be null or valid for writes.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_za(
    path: *const c_char,
    flags: u32,
    results: *mut FfiResultsA,
) -> c_int {
    if path.is_null() {
        return WINPATHCLASS_E_NULL;
    }
    let len = zero_terminated_len(path as *const <MultiByte as Encoding>::Unit);
    classify_raw::<MultiByte>(path, len, flags, results)
}

/**
The `wchar_t` sibling of `winpathclass_classify_za`.

# Safety

As for `winpathclass_classify_za`.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_zw(
    path: *const wchar_t,
    flags: u32,
    results: *mut FfiResultsW,
) -> c_int {
    if path.is_null() {
        return WINPATHCLASS_E_NULL;
    }
    let len = zero_terminated_len(path as *const <Wide as Encoding>::Unit);
    classify_raw::<Wide>(path, len, flags, results)
}

/**
Classifies only the root of `len` units of `path`, storing it in `root`.

# Safety

`path` must be null (with `len` zero) or valid for reads of `len` units.  `root` must be null or valid for writes.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_root_a(
    path: *const c_char,
    len: usize,
    flags: u32,
    root: *mut FfiSlice<c_char>,
) -> c_int {
    classify_root_raw::<MultiByte>(path, len, flags, root)
}

/**
The `wchar_t` sibling of `winpathclass_classify_root_a`.

# Safety

As for `winpathclass_classify_root_a`.
*/
#[no_mangle]
pub unsafe extern "C" fn winpathclass_classify_root_w(
    path: *const wchar_t,
    len: usize,
    flags: u32,
    root: *mut FfiSlice<wchar_t>,
) -> c_int {
    classify_root_raw::<Wide>(path, len, flags, root)
}

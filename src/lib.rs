/*!
This crate classifies Windows-style path strings by syntax alone, and splits them into their parts, without allocating or touching the filesystem.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

```
use winpathclass::{classify, ParseFlags, PathClassification};

let c = classify(r"\\server\share\dir\file.txt", ParseFlags::empty());
assert_eq!(c.kind(), PathClassification::UncRooted);
assert_eq!(c.root_str(), Some(r"\\server\share\"));
assert_eq!(c.directory_str(), Some(r"dir\"));
assert_eq!(c.stem_str(), Some("file"));
assert_eq!(c.extension_str(), Some(".txt"));
```

The following table describes the entry points, and when to use them.

| Input | Full decomposition | Root only |
| ---: | --- | --- |
| `&str` | `classify` | `classify_root` |
| `&[u16]` (*e.g.* from `encode_wide`) | `classify_wide` | `classify_root_wide` |
| Any `&[U]` where `U: Unit` | `classify_units` | `classify_root_units` |
| `*const c_char` | `winpathclass_classify_a` | `winpathclass_classify_root_a` |
| `*const wchar_t` | `winpathclass_classify_w` | `winpathclass_classify_root_w` |

A classification is a pure function of its input and flags.  Results borrow from the input, and are never zero-terminated.
*/
extern crate libc;

#[doc(hidden)] pub mod doc;
pub mod classify;
pub mod config;
pub mod encoding;
pub mod error;
pub mod ffi;
pub mod flags;

mod util;

pub use crate::classify::{
    classify, classify_root, classify_root_units, classify_root_wide, classify_units,
    classify_wide, is_path_absolute, is_path_rooted, is_path_unc, Classification,
    PathClassification, Span,
};
pub use crate::config::ClassifierConfig;
pub use crate::error::{ClassificationError, ConfigError, FlagsError};
pub use crate::flags::ParseFlags;
pub use crate::util::UnitsDisplay;

/*!
Loading parse flags from configuration.

Settings are layered, later sources taking precedence:

1. an optional `winpathclass.toml` in the working directory;
2. an optional file named by the `WINPATHCLASS_CONFIG` environment variable;
3. environment variables prefixed `WINPATHCLASS__`, *e.g.* `WINPATHCLASS__RECOGNISE_TILDE_HOME=true`.
*/
use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, FlagsError};
use crate::flags::ParseFlags;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub recognise_tilde_home: bool,
    pub ignore_invalid_chars: bool,
    pub ignore_invalid_slash_runs: bool,
    pub ignore_invalid_chars_in_long_path: bool,
    /// A raw flags word, combined with the booleans above.
    pub flags: Option<u32>,
}

impl ClassifierConfig {
    /**
    Parses a configuration from TOML text, ignoring the file and environment layers.
    */
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml))
            .build()?;
        let classifier_cfg: ClassifierConfig = cfg.try_deserialize()?;
        classifier_cfg.parse_flags()?;
        Ok(classifier_cfg)
    }

    /**
    Folds the configured settings into a flags word.

    # Failure

    Fails if the raw `flags` word carries unrecognised bits.
    */
    pub fn parse_flags(&self) -> Result<ParseFlags, FlagsError> {
        let mut flags = match self.flags {
            Some(bits) => ParseFlags::from_raw(bits)?,
            None => ParseFlags::empty(),
        };
        if self.recognise_tilde_home {
            flags |= ParseFlags::RECOGNISE_TILDE_HOME;
        }
        if self.ignore_invalid_chars {
            flags |= ParseFlags::IGNORE_INVALID_CHARS;
        }
        if self.ignore_invalid_slash_runs {
            flags |= ParseFlags::IGNORE_INVALID_SLASH_RUNS;
        }
        if self.ignore_invalid_chars_in_long_path {
            flags |= ParseFlags::IGNORE_INVALID_CHARS_IN_LONG_PATH;
        }
        Ok(flags)
    }
}

/**
Loads the layered configuration described in the module documentation.
*/
pub fn load() -> Result<ClassifierConfig, ConfigError> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::with_name("winpathclass").required(false));

    if let Ok(custom_path) = std::env::var("WINPATHCLASS_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    builder = builder.add_source(
        ::config::Environment::with_prefix("WINPATHCLASS")
            .separator("__")
            .try_parsing(true),
    );

    let cfg = builder.build()?;
    let classifier_cfg: ClassifierConfig = cfg.try_deserialize()?;
    let flags = classifier_cfg.parse_flags()?;

    if flags.contains(ParseFlags::IGNORE_INVALID_CHARS) {
        warn!("invalid-character checks are disabled by configuration");
    }
    if flags.contains(ParseFlags::IGNORE_INVALID_SLASH_RUNS) {
        warn!("separator-run checks are disabled by configuration");
    }

    Ok(classifier_cfg)
}

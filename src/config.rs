//! Password defaults read from the environment.

use crate::errors::{ GeneratorError, Result };
use crate::password::PasswordOptions;

/// Default password options, overridable through environment variables:
///
/// | Variable | Default |
/// |----------|---------|
/// | `GENERATEPASS_LENGTH` | `12` |
/// | `GENERATEPASS_UPPERCASE` | `true` |
/// | `GENERATEPASS_SYMBOLS` | `true` |
/// | `GENERATEPASS_DIGITS` | `true` |
/// | `GENERATEPASS_EXCLUDE_AMBIGUOUS` | `false` |
/// | `GENERATEPASS_URL_SAFE` | `false` |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub defaults: PasswordOptions,
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Set but unparseable variables are an error, never silently ignored.
    /// Range checks are left to [`crate::generate_password`], so that
    /// explicit options can still replace an out-of-range default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = PasswordOptions::default();

        let defaults = PasswordOptions {
            length: parse_var(&lookup, "GENERATEPASS_LENGTH", base.length)?,
            include_uppercase: parse_var(&lookup, "GENERATEPASS_UPPERCASE", base.include_uppercase)?,
            include_symbols: parse_var(&lookup, "GENERATEPASS_SYMBOLS", base.include_symbols)?,
            include_digits: parse_var(&lookup, "GENERATEPASS_DIGITS", base.include_digits)?,
            exclude_ambiguous: parse_var(&lookup, "GENERATEPASS_EXCLUDE_AMBIGUOUS", base.exclude_ambiguous)?,
            url_safe: parse_var(&lookup, "GENERATEPASS_URL_SAFE", base.url_safe)?,
        };

        Ok(Self { defaults })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| GeneratorError::invalid(format!("{} has an invalid value: {:?}", key, raw))),
    }
}

use crate::errors::{ GeneratorError, Result };
use crate::generators::{ build_pool, sample, PoolSpec };

use log::debug;
use serde::{ Deserialize, Serialize };

pub const MIN_LENGTH: usize = 5;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_symbols: bool,
    pub include_digits: bool,
    pub exclude_ambiguous: bool,
    pub url_safe: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_symbols: true,
            include_digits: true,
            exclude_ambiguous: false,
            url_safe: false,
        }
    }
}

impl PasswordOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Parse options from untyped JSON input.
    ///
    /// Missing keys take their defaults. Wrongly typed values and unknown keys
    /// are rejected, as is a length below [`MIN_LENGTH`].
    pub fn from_json(input: &str) -> Result<Self> {
        let options: PasswordOptions = serde_json::from_str(input)?;
        options.validate()?;

        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_LENGTH {
            return Err(GeneratorError::invalid(format!(
                "Minimum length is {}, got {}",
                MIN_LENGTH, self.length
            )));
        }

        Ok(())
    }

    fn pool_spec(&self) -> PoolSpec {
        PoolSpec {
            uppercase: self.include_uppercase,
            symbols: self.include_symbols,
            digits: self.include_digits,
            exclude_url_unsafe: self.url_safe,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

/// Generate a random password of exactly `options.length` characters.
///
/// Characters are drawn independently, so a short password may miss an
/// enabled category entirely.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    options.validate()?;

    let pool = build_pool(&options.pool_spec());
    debug!("Generating password of length {} from a pool of {} characters", options.length, pool.len());

    let mut rng = rand::rng();
    sample(&pool, options.length, &mut rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::generators::{ build_pool, AMBIGUOUS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, URL_UNSAFE };

    #[test]
    fn default_password_has_requested_length() {
        let password = generate_password(&PasswordOptions::default()).unwrap();
        assert_eq!(password.chars().count(), DEFAULT_LENGTH);
    }

    #[test]
    fn length_is_honoured() {
        for length in [5, 6, 12, 64, 256] {
            let password = generate_password(&PasswordOptions::with_length(length)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn short_length_is_rejected() {
        for length in [0, 1, 4] {
            let result = generate_password(&PasswordOptions::with_length(length));
            assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
        }
    }

    #[test]
    fn default_password_uses_all_categories_only() {
        let allowed = format!("{}{}{}{}", LOWERCASE, UPPERCASE, SYMBOLS, DIGITS);
        for _ in 0..200 {
            let password = generate_password(&PasswordOptions::default()).unwrap();
            assert!(password.chars().all(|c| allowed.contains(c)));
        }
    }

    #[test]
    fn lowercase_only_password() {
        let options = PasswordOptions {
            include_uppercase: false,
            include_symbols: false,
            include_digits: false,
            ..PasswordOptions::with_length(12)
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn url_safe_password_has_no_unsafe_characters() {
        let options = PasswordOptions {
            url_safe: true,
            ..PasswordOptions::with_length(200)
        };
        for _ in 0..50 {
            let password = generate_password(&options).unwrap();
            assert!(password.chars().all(|c| !URL_UNSAFE.contains(c)));
        }
    }

    #[test]
    fn ambiguous_characters_are_excluded() {
        let options = PasswordOptions {
            exclude_ambiguous: true,
            ..PasswordOptions::with_length(200)
        };
        for _ in 0..50 {
            let password = generate_password(&options).unwrap();
            assert!(password.chars().all(|c| !AMBIGUOUS.contains(c)));
        }
    }

    #[test]
    fn combined_exclusions_stay_within_pool() {
        let options = PasswordOptions {
            url_safe: true,
            exclude_ambiguous: true,
            ..PasswordOptions::with_length(300)
        };
        let pool = build_pool(&options.pool_spec());
        assert!(pool.iter().all(|c| !URL_UNSAFE.contains(*c) && !AMBIGUOUS.contains(*c)));

        for _ in 0..50 {
            let password = generate_password(&options).unwrap();
            assert_eq!(password.chars().count(), 300);
            for c in password.chars() {
                assert!(pool.contains(&c), "{} is not in the pool", c);
                assert!(!URL_UNSAFE.contains(c));
                assert!(!AMBIGUOUS.contains(c));
            }
        }
    }

    // Probabilistic: a collision among 1000 passwords drawn from 87^12
    // possibilities is astronomically unlikely.
    #[test]
    fn thousand_passwords_are_unique() {
        let passwords: HashSet<String> = (0..1000)
            .map(|_| generate_password(&PasswordOptions::default()).unwrap())
            .collect();
        assert_eq!(passwords.len(), 1000);
    }

    #[test]
    fn twenty_thousand_passwords_are_unique() {
        let options = PasswordOptions::with_length(12);
        let mut seen = HashSet::new();
        for _ in 0..20_000 {
            let password = generate_password(&options).unwrap();
            assert_eq!(password.chars().count(), 12);
            assert!(seen.insert(password));
        }
    }

    #[test]
    fn from_json_applies_defaults() {
        let options = PasswordOptions::from_json("{}").unwrap();
        assert_eq!(options, PasswordOptions::default());

        let options = PasswordOptions::from_json(r#"{"length": 20, "url_safe": true}"#).unwrap();
        assert_eq!(options.length, 20);
        assert!(options.url_safe);
        assert!(options.include_uppercase);
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let inputs = [
            r#"{"length": "invalid"}"#,
            r#"{"length": -3}"#,
            r#"{"include_uppercase": "invalid"}"#,
            r#"{"include_symbols": "invalid"}"#,
            r#"{"include_digits": "invalid"}"#,
            r#"{"exclude_ambiguous": "invalid"}"#,
            r#"{"url_safe": "invalid"}"#,
            r#"{"url_safe": 1}"#,
            r#"{"colour": true}"#,
        ];
        for input in inputs {
            let result = PasswordOptions::from_json(input);
            assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))), "{} was accepted", input);
        }
    }

    #[test]
    fn from_json_rejects_short_length() {
        let result = PasswordOptions::from_json(r#"{"length": 0}"#);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }
}

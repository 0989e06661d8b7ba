use rand::Rng;
use rand::seq::IndexedRandom;

use crate::errors::{ GeneratorError, Result };

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &str = "!#$%&()*+,-./:;<=>?@[]_{}";
pub const DIGITS: &str = "0123456789";

/// Characters that must be percent-encoded in a URL path or query.
pub const URL_UNSAFE: &str = "=#%/:@&?";

/// Visually confusable characters.
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2sb|io";

/// Which categories make up the pool and what gets stripped afterwards.
#[derive(Debug, Clone, Copy)]
pub struct PoolSpec {
    pub uppercase: bool,
    pub symbols: bool,
    pub digits: bool,
    pub exclude_url_unsafe: bool,
    pub exclude_ambiguous: bool,
}

/// Union the enabled categories in order, then filter out excluded characters.
///
/// Duplicates coming from the union are kept; exclusion removes every
/// occurrence of an excluded character.
pub fn build_pool(spec: &PoolSpec) -> Vec<char> {
    let mut pool: Vec<char> = LOWERCASE.chars().collect();

    if spec.uppercase {
        pool.extend(UPPERCASE.chars());
    }

    if spec.symbols {
        pool.extend(SYMBOLS.chars());
    }

    if spec.digits {
        pool.extend(DIGITS.chars());
    }

    if spec.exclude_url_unsafe {
        pool.retain(|c| !URL_UNSAFE.contains(*c));
    }

    if spec.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(*c));
    }

    pool
}

/// Draw `length` characters uniformly, with replacement, from `pool`.
pub fn sample<R: Rng + ?Sized>(pool: &[char], length: usize, rng: &mut R) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }

    (0..length)
        .map(|_| pool.choose(&mut *rng).copied().ok_or(GeneratorError::EmptyCharset))
        .collect()
}

/// Strip every URL-unsafe character from an already encoded string.
pub fn strip_url_unsafe(encoded: &str) -> String {
    encoded.chars().filter(|c| !URL_UNSAFE.contains(*c)).collect()
}

/// Eight decimal digits, zero padded on the left.
pub fn generate_digit_block() -> String {
    let mut rng = rand::rng();

    format!("{:08}", rng.random_range(0..=99_999_999u32))
}

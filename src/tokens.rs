//! Random tokens for API keys and secrets.
//!
//! Every token is derived from a fresh [`Seed`]: the current Unix time in
//! seconds followed by two random 8-digit blocks.

use log::trace;
use serde::{ Deserialize, Serialize };

use crate::encryption::{ encode_base64, encode_base64_lines, encode_base64_url, Seed };
use crate::errors::Result;
use crate::generators::strip_url_unsafe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Hex,
    Base64,
    Base64Raw,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TokenOptions {
    pub url_safe: bool,
}

impl TokenOptions {
    /// Parse token options from untyped JSON input.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// SHA-256 of a fresh seed as 64 lowercase hex characters.
pub fn token_hex() -> String {
    let seed = Seed::generate();
    trace!("Deriving hex token");

    hex::encode(seed.sha256())
}

/// Standard padded base64 of the seed's SHA-256 digest.
///
/// With `url_safe`, URL-unsafe characters are removed from the encoded
/// string; `+` is left untouched.
pub fn token_base64(url_safe: bool) -> String {
    let seed = Seed::generate();
    trace!("Deriving base64 token (url_safe: {})", url_safe);

    let encoded = encode_base64(&seed.sha256());
    if url_safe {
        strip_url_unsafe(&encoded)
    } else {
        encoded
    }
}

/// Base64 of the seed text itself.
///
/// With `url_safe` the URL-safe alphabet is used without padding. Otherwise
/// the output is line-oriented padded base64 and ends with a newline.
pub fn token_base64b(url_safe: bool) -> String {
    let seed = Seed::generate();
    trace!("Encoding raw seed token (url_safe: {})", url_safe);

    if url_safe {
        encode_base64_url(seed.as_str().as_bytes())
    } else {
        encode_base64_lines(seed.as_str().as_bytes())
    }
}

pub fn generate_token(kind: TokenKind, options: &TokenOptions) -> String {
    match kind {
        TokenKind::Hex => token_hex(),
        TokenKind::Base64 => token_base64(options.url_safe),
        TokenKind::Base64Raw => token_base64b(options.url_safe),
    }
}

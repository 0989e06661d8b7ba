use base64::{ Engine as _, engine::general_purpose::{ STANDARD, URL_SAFE_NO_PAD } };
use chrono::Utc;
use sha2::{ Digest, Sha256 };

use crate::generators::generate_digit_block;

/// Encoded characters per line in the line-oriented base64 text form.
const BASE64_LINE_LENGTH: usize = 60;

/// Unix timestamp followed by two independent 8-digit random blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(String);

impl Seed {
    pub fn generate() -> Self {
        Self::from_parts(Utc::now().timestamp(), &generate_digit_block(), &generate_digit_block())
    }

    pub fn from_parts(timestamp: i64, first: &str, second: &str) -> Self {
        Seed(format!("{}{}{}", timestamp, first, second))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sha256(&self) -> [u8; 32] {
        Sha256::digest(self.0.as_bytes()).into()
    }
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn encode_base64_url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Padded standard base64 split into lines of 60 characters, every line
/// terminated by a newline.
pub fn encode_base64_lines(bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    let mut out = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_LENGTH + 1);

    // base64 output is pure ASCII, so byte chunks are char boundaries
    for line in encoded.as_bytes().chunks(BASE64_LINE_LENGTH) {
        out.push_str(std::str::from_utf8(line).unwrap_or_default());
        out.push('\n');
    }

    out
}

//! Random passwords and random tokens for API keys and secrets.
//!
//! ```rust
//! use generatepass::{ generate_password, token_hex, PasswordOptions };
//!
//! let password = generate_password(&PasswordOptions::with_length(16)).unwrap();
//! assert_eq!(password.chars().count(), 16);
//!
//! assert_eq!(token_hex().len(), 64);
//! ```
//!
//! Randomness comes from `rand::rng()`, a thread-local generator seeded from
//! the OS, so all functions may be called from any thread.

pub mod config;
pub mod encryption;
pub mod errors;
pub mod generators;
pub mod password;
pub mod tokens;

pub use config::GeneratorConfig;
pub use errors::{ GeneratorError, Result };
pub use password::{ generate_password, PasswordOptions, DEFAULT_LENGTH, MIN_LENGTH };
pub use tokens::{ generate_token, token_base64, token_base64b, token_hex, TokenKind, TokenOptions };

//! Share link token generation and lookup-key extraction.

use rand::RngExt;
use rand::distr::Alphanumeric;

/// Generates opaque share link tokens.
///
/// Tokens are drawn from the 62-symbol alphanumeric alphabet using the
/// process CSPRNG; at the default length of 32 symbols the space is large
/// enough (~190 bits) that collisions against any realistic link
/// population are negligible. Callers still check the generated token
/// against the existing collection before persisting.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    /// Token length in symbols.
    length: usize,
}

impl TokenGenerator {
    /// Create a generator producing tokens of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Generate a fresh random token.
    pub fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Extract the lookup token from caller input.
///
/// Callers may present a bare token, a trailing path segment, or a full
/// share URL. Lookup is tied strictly to the id embedded in the final
/// path segment — never to substring containment against stored URLs.
pub fn extract_token(input: &str) -> &str {
    let input = input.split('?').next().unwrap_or(input);
    let input = input.trim_end_matches('/');
    input.rsplit('/').next().unwrap_or(input)
}

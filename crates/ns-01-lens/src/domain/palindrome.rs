//! Palindrome detection.
//!
//! A palindrome reads the same forwards and backwards: submitting one is
//! inherently saying it twice, so the admission store treats it as
//! self-exposing.

use super::canonical::nfc;
use super::lens::Lens;

/// Reserved prefix keeping palindrome forms out of every other lens's key space.
pub const PALINDROME_PREFIX: &str = "__palindrome__:";

/// Emits a tagged form when the input's alphanumeric core is a palindrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct Palindrome;

impl Palindrome {
    /// Lens name, also recorded as `exposed_via` on self-exposure.
    pub const NAME: &'static str = "palindrome";
}

impl Lens for Palindrome {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn canonicalize(&self, input: &str) -> Vec<String> {
        // Compose before stripping so combining marks stay attached to letters
        let cleaned: Vec<char> = nfc(input)
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        if cleaned.len() < 2 || !cleaned.iter().eq(cleaned.iter().rev()) {
            return Vec::new();
        }

        let core: String = cleaned.into_iter().collect();
        vec![format!("{PALINDROME_PREFIX}{core}")]
    }
}

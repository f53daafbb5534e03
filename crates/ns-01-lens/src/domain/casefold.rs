//! Case-collapsing lenses.

use super::canonical::nfc;
use super::lens::Lens;

/// Collapses ASCII case: "Hello" → "hello". Non-ASCII characters pass through.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaseFold;

impl Lens for CaseFold {
    fn name(&self) -> &'static str {
        "casefold"
    }

    fn canonicalize(&self, input: &str) -> Vec<String> {
        vec![input.to_ascii_lowercase()]
    }
}

/// Full Unicode case folding over NFC input ("Straße" → "strasse", "ﬁ" → "fi").
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeCaseFold;

impl Lens for UnicodeCaseFold {
    fn name(&self) -> &'static str {
        "unicode_casefold"
    }

    fn canonicalize(&self, input: &str) -> Vec<String> {
        let lowered = nfc(input).to_lowercase();
        let mut folded = String::with_capacity(lowered.len());
        for c in lowered.chars() {
            match expand_fold(c) {
                Some(expansion) => folded.push_str(expansion),
                None => folded.push(c),
            }
        }
        vec![folded]
    }
}

/// Multi-codepoint folds that `to_lowercase` leaves alone.
fn expand_fold(c: char) -> Option<&'static str> {
    match c {
        'ß' | 'ẞ' => Some("ss"),
        // Word-final sigma, produced by `to_lowercase`
        'ς' => Some("σ"),
        'ﬀ' => Some("ff"),
        'ﬁ' => Some("fi"),
        'ﬂ' => Some("fl"),
        'ﬃ' => Some("ffi"),
        'ﬄ' => Some("ffl"),
        'ﬅ' | 'ﬆ' => Some("st"),
        _ => None,
    }
}

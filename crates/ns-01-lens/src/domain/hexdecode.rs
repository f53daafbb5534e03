//! Hexadecimal alias lens.

use super::lens::Lens;

/// Treats the input as hex-encoded text: "6869" collapses to "hi".
///
/// Input that does not decode (or decodes to itself) passes through
/// unchanged, so plain text is indexed under `hexdecode` too and a later
/// hex spelling of it can collide.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexDecode;

impl Lens for HexDecode {
    fn name(&self) -> &'static str {
        "hexdecode"
    }

    fn canonicalize(&self, input: &str) -> Vec<String> {
        vec![decode(input).unwrap_or_else(|| input.to_string())]
    }
}

/// Decoded text when `input` is even-length hex of valid UTF-8 distinct from `input`.
fn decode(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() % 2 != 0 {
        return None;
    }
    let bytes = hex::decode(trimmed).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    (decoded != input).then_some(decoded)
}

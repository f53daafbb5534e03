//! Lens capability and ordered lens sets.

use std::fmt;
use std::sync::Arc;

use super::canonical::IDENTITY;
use super::casefold::{CaseFold, UnicodeCaseFold};
use super::hexdecode::HexDecode;
use super::homoglyph::Homoglyph;
use super::palindrome::Palindrome;

/// Maps an input string to zero or more canonical forms.
///
/// Two inputs are equivalent under a lens when it produces a shared form
/// for both. Returning an empty vector means the lens does not apply.
pub trait Lens: Send + Sync {
    /// Short stable identifier (e.g. `"casefold"`), used to qualify index keys.
    fn name(&self) -> &'static str;

    /// Canonical forms of `input`.
    fn canonicalize(&self, input: &str) -> Vec<String>;
}

/// Ordered collection of lenses.
///
/// Cloning is cheap; lenses are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct LensSet {
    lenses: Vec<Arc<dyn Lens>>,
}

impl LensSet {
    /// A set with no lenses. Canonicalization yields only the identity form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in lenses in evaluation order.
    pub fn builtin() -> Self {
        Self::empty()
            .with(CaseFold)
            .with(UnicodeCaseFold)
            .with(Palindrome)
            .with(HexDecode)
            .with(Homoglyph)
    }

    /// Append a lens.
    ///
    /// A lens whose name is already taken (or is the reserved `identity`)
    /// is ignored; the first registration wins.
    pub fn with<L: Lens + 'static>(mut self, lens: L) -> Self {
        let name = lens.name();
        if name != IDENTITY && !self.contains(name) {
            self.lenses.push(Arc::new(lens));
        }
        self
    }

    /// Number of configured lenses (identity not counted).
    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }

    /// Whether a lens with this name is configured.
    pub fn contains(&self, name: &str) -> bool {
        self.lenses.iter().any(|l| l.name() == name)
    }

    /// Lenses in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Lens> {
        self.lenses.iter().map(|l| l.as_ref())
    }

    /// Lens names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|l| l.name()).collect()
    }
}

impl fmt::Debug for LensSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

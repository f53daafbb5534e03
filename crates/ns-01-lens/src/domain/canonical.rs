//! Canonical form mapping.
//!
//! `canonicalize` is the single entry point the admission store uses: it
//! produces the identity form followed by every applicable lens, in the
//! configured order.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use super::lens::LensSet;

/// Name of the always-present identity form.
pub const IDENTITY: &str = "identity";

/// Forms produced by one lens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LensForms {
    /// Lens name (`identity` for the identity form)
    pub lens: &'static str,
    /// Deduplicated forms in first-seen order, never empty
    pub forms: Vec<String>,
}

/// Mapping from lens name to canonical forms, in evaluation order.
///
/// INVARIANT: the first entry is always `identity` with exactly one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalForms {
    entries: Vec<LensForms>,
}

impl CanonicalForms {
    /// The NFC-normalized input.
    pub fn identity(&self) -> &str {
        self.entries
            .first()
            .and_then(|e| e.forms.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Forms produced by `lens`, if it applied.
    pub fn get(&self, lens: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.lens == lens)
            .map(|e| e.forms.as_slice())
    }

    /// Whether `lens` produced at least one form.
    pub fn contains_lens(&self, lens: &str) -> bool {
        self.get(lens).is_some()
    }

    /// Entries in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &LensForms> {
        self.entries.iter()
    }

    /// Flattened `(lens, form)` pairs in evaluation order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .flat_map(|e| e.forms.iter().map(move |f| (e.lens, f.as_str())))
    }

    /// Number of lens entries, identity included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the identity entry is unconditional.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// NFC-normalize a string.
pub fn nfc(input: &str) -> String {
    input.nfc().collect()
}

/// Run `input` through the identity form and every lens in `lenses`.
pub fn canonicalize(lenses: &LensSet, input: &str) -> CanonicalForms {
    let mut entries = Vec::with_capacity(lenses.len() + 1);
    entries.push(LensForms {
        lens: IDENTITY,
        forms: vec![nfc(input)],
    });

    for lens in lenses.iter() {
        let forms = dedup(lens.canonicalize(input));
        if !forms.is_empty() {
            entries.push(LensForms {
                lens: lens.name(),
                forms,
            });
        }
    }

    CanonicalForms { entries }
}

fn dedup(forms: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(forms.len());
    forms
        .into_iter()
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

//! # NS-01 Lens
//!
//! Canonicalization framework deciding when two submitted secrets are "the same".
//!
//! ## Architecture
//!
//! This crate is pure domain logic (no I/O, no async, no shared state):
//!
//! - `Lens`: single-method capability mapping an input to canonical forms
//! - `LensSet`: ordered, shareable collection of lenses
//! - `canonicalize`: runs an input through the identity form plus every lens
//! - Built-in lenses: `CaseFold`, `UnicodeCaseFold`, `Palindrome`, `HexDecode`,
//!   `Homoglyph`
//!
//! ## Evaluation Order
//!
//! ```text
//! input ──→ identity (NFC) ──→ casefold ──→ unicode_casefold ──→ palindrome
//!                                                                  │
//!                               homoglyph ←── hexdecode ←──────────┘
//! ```
//!
//! The order only affects which lens name is reported first on a collision;
//! forms are grouped by lens name so the union is order-independent.
//!
//! ## Invariants
//!
//! - **Identity always present**: every `CanonicalForms` starts with `identity`
//! - **Determinism**: same `LensSet` + same input = identical `CanonicalForms`
//! - **Inapplicable lenses are silent**: an empty form set adds no entry
//!
//! ## Usage Example
//!
//! ```
//! use ns_01_lens::{canonicalize, LensSet};
//!
//! let lenses = LensSet::builtin();
//! let forms = canonicalize(&lenses, "6869");
//!
//! assert_eq!(forms.identity(), "6869");
//! assert_eq!(forms.get("hexdecode"), Some(&["hi".to_string()][..]));
//! ```

pub mod domain;

// Re-exports for convenience
pub use domain::canonical::{canonicalize, nfc, CanonicalForms, LensForms, IDENTITY};
pub use domain::casefold::{CaseFold, UnicodeCaseFold};
pub use domain::hexdecode::HexDecode;
pub use domain::homoglyph::{map_homoglyph, Homoglyph};
pub use domain::lens::{Lens, LensSet};
pub use domain::palindrome::{Palindrome, PALINDROME_PREFIX};

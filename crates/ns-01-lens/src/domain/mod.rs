//! Domain Layer - Pure canonicalization logic
//!
//! This layer contains:
//! - The `Lens` capability and `LensSet`
//! - The canonical form mapping (`CanonicalForms`)
//! - Built-in lenses
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Every lens is a pure, total function of its input

pub mod canonical;
pub mod casefold;
pub mod hexdecode;
pub mod homoglyph;
pub mod lens;
pub mod palindrome;

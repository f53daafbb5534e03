//! # NS-02 Admission Store
//!
//! Holds every submitted secret, decides on each submission whether the
//! value is new or a repeat, and exposes private secrets on repeat.
//!
//! ## Lifecycle
//!
//! ```text
//! submit(v) ──palindrome?──yes──→ new secret, already [EXPOSED]
//!     │
//!     no
//!     ↓
//! look up (lens, form) pairs ──hit on PRIVATE──→ that secret → [EXPOSED]
//!     │
//!     no private hit
//!     ↓
//! new [PRIVATE] secret, every pair indexed to it
//! ```
//!
//! ## Invariants
//!
//! - **Monotonic exposure**: Exposed never returns to Private
//! - **Atomic submission**: the lookup and the insert run under one write lock
//! - **Value preserved**: `Secret::value` is exactly what was submitted
//! - **Private forms indexed**: every non-palindrome form of a private secret
//!   resolves to that secret in the reverse index
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  service/  - AdmissionService (RwLock<SecretLedger> + clock) │
//! └─────────────────────────────────────────────────────────────┘
//!                        ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - AdmissionApi                           │
//! │  ports/outbound.rs - TimeSource                             │
//! └─────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────┐
//! │  domain/ - Secret, ReverseIndex, SecretLedger               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use ns_02_admission::{AdmissionApi, AdmissionService};
//!
//! let store = AdmissionService::new();
//! let first = store.submit("Hello", "alice");
//! assert!(first.secret.is_private());
//!
//! let second = store.submit("hello", "bob");
//! assert_eq!(second.secret.id, first.secret.id);
//! assert_eq!(second.secret.exposed_via.as_deref(), Some("casefold"));
//! ```
//!
//! Secret values never appear in log output.

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    submitter_or_anonymous, validate_value, AdmissionError, Exposure, IndexKey, ReverseIndex,
    Secret, SecretId, SecretLedger, SecretState, StoreStats, SubmitOutcome, SubmitResult,
    ANONYMOUS, MSG_ADMITTED, MSG_SELF_EXPOSED,
};
pub use ports::{AdmissionApi, FixedTimeSource, SystemTimeSource, TimeSource};
pub use service::AdmissionService;

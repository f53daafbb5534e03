//! # Domain Layer - Admission Store
//!
//! Pure business logic: no locks, no clocks, no I/O.
//!
//! ## Components
//!
//! - `entities`: SecretId, SecretState, Secret
//! - `index`: IndexKey, ReverseIndex
//! - `ledger`: SecretLedger, the submission algorithm
//! - `services`: input validation helpers
//! - `value_objects`: SubmitOutcome, Exposure, SubmitResult, StoreStats
//! - `errors`: AdmissionError

pub mod entities;
pub mod errors;
pub mod index;
pub mod ledger;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use index::*;
pub use ledger::*;
pub use services::*;
pub use value_objects::*;

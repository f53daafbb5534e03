//! # Inbound Port - AdmissionApi
//!
//! Primary driving port exposing the admission store.

use crate::domain::{AdmissionError, Secret, SecretId, StoreStats, SubmitResult};

/// Primary API for the admission store.
///
/// All methods take `&self`: implementations serialize mutation internally
/// so the API can be shared behind an `Arc` across request handlers.
///
/// # Example
///
/// ```rust,ignore
/// use ns_02_admission::ports::AdmissionApi;
///
/// fn example(store: &impl AdmissionApi) {
///     let first = store.submit("Hello", "alice");
///     let second = store.submit("hello", "bob");
///     assert_eq!(first.secret.id, second.secret.id);
/// }
/// ```
pub trait AdmissionApi: Send + Sync {
    /// Submits a non-blank value.
    ///
    /// Runs the whole canonicalize/expose/admit sequence atomically with
    /// respect to other submissions.
    fn submit(&self, value: &str, submitter: &str) -> SubmitResult;

    /// Snapshot of one secret.
    fn get(&self, id: &SecretId) -> Option<Secret>;

    /// Snapshot of every secret, in no guaranteed order.
    fn list(&self) -> Vec<Secret>;

    /// Aggregate counts.
    fn stats(&self) -> StoreStats;

    /// Like `get`, but a missing secret is an error.
    fn require(&self, id: &SecretId) -> Result<Secret, AdmissionError> {
        self.get(id)
            .ok_or_else(|| AdmissionError::SecretNotFound(id.clone()))
    }

    /// Snapshot of every exposed secret.
    fn exposed(&self) -> Vec<Secret> {
        self.list().into_iter().filter(Secret::is_exposed).collect()
    }
}

//! Outbound (driven) ports for the wall.

use ns_02_admission::AdmissionApi;

/// Where the wall reads exposed values from.
///
/// The wall only reads; it never mutates its source.
pub trait ExposedSource: Send + Sync {
    /// Values of every currently exposed secret, in any order.
    fn exposed_values(&self) -> Vec<String>;
}

impl<A: AdmissionApi + ?Sized> ExposedSource for A {
    fn exposed_values(&self) -> Vec<String> {
        self.exposed().into_iter().map(|secret| secret.value).collect()
    }
}

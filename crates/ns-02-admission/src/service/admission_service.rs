//! Admission Service
//!
//! Implements `AdmissionApi` over a lock-guarded `SecretLedger`.

use ns_01_lens::LensSet;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::domain::{Secret, SecretId, SecretLedger, StoreStats, SubmitOutcome, SubmitResult};
use crate::ports::{AdmissionApi, SystemTimeSource, TimeSource};

/// Thread-safe admission store.
///
/// Submissions take the write lock for the whole canonicalize/lookup/insert
/// sequence; reads take the read lock and return clones.
pub struct AdmissionService<T: TimeSource = SystemTimeSource> {
    ledger: RwLock<SecretLedger>,
    clock: T,
}

impl AdmissionService<SystemTimeSource> {
    /// Store with the built-in lens set and the system clock.
    pub fn new() -> Self {
        Self::with_lenses(LensSet::builtin())
    }

    pub fn with_lenses(lenses: LensSet) -> Self {
        Self::with_clock(lenses, SystemTimeSource)
    }
}

impl Default for AdmissionService<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> AdmissionService<T> {
    pub fn with_clock(lenses: LensSet, clock: T) -> Self {
        Self {
            ledger: RwLock::new(SecretLedger::new(lenses)),
            clock,
        }
    }

    /// Names of the configured lenses, in evaluation order.
    pub fn lens_names(&self) -> Vec<&'static str> {
        self.ledger.read().lenses().names()
    }
}

impl<T: TimeSource> AdmissionApi for AdmissionService<T> {
    fn submit(&self, value: &str, submitter: &str) -> SubmitResult {
        let now = self.clock.now();
        let result = self.ledger.write().submit(value, submitter, now);

        match &result.outcome {
            SubmitOutcome::Admitted => {
                debug!(secret_id = %result.secret.id, submitter, "Admitted private secret");
            }
            SubmitOutcome::ExposedExisting { lens } => {
                info!(
                    secret_id = %result.secret.id,
                    lens = %lens,
                    exposed_by = submitter,
                    "Secret exposed"
                );
            }
            SubmitOutcome::SelfExposed => {
                info!(
                    secret_id = %result.secret.id,
                    exposed_by = submitter,
                    "Secret self-exposed"
                );
            }
        }

        result
    }

    fn get(&self, id: &SecretId) -> Option<Secret> {
        self.ledger.read().get(id).cloned()
    }

    /// Shuffled so listing order leaks nothing about submission order.
    fn list(&self) -> Vec<Secret> {
        let mut secrets: Vec<Secret> = self.ledger.read().iter().cloned().collect();
        secrets.shuffle(&mut rand::thread_rng());
        secrets
    }

    fn stats(&self) -> StoreStats {
        self.ledger.read().stats()
    }

    fn exposed(&self) -> Vec<Secret> {
        self.ledger
            .read()
            .iter()
            .filter(|s| s.is_exposed())
            .cloned()
            .collect()
    }
}

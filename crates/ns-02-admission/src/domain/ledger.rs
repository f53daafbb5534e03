//! The secret ledger: storage plus the submission algorithm.
//!
//! `SecretLedger` is single-threaded and clock-free. Callers serialize access
//! and supply the timestamp (see `AdmissionService`).
//!
//! ## Submission
//!
//! 1. Canonicalize the value.
//! 2. A palindrome form makes the secret self-exposing: it is stored already
//!    exposed and never indexed.
//! 3. Otherwise the `(lens, form)` pairs are looked up in evaluation order. The
//!    first one owned by a *private* secret exposes that secret and ends the
//!    submission. Keys owned by already-exposed secrets are skipped.
//! 4. With no private match, a new private secret is stored and every pair is
//!    indexed to it, replacing any previous owner.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ns_01_lens::{canonicalize, LensSet, Palindrome};

use super::entities::{Secret, SecretId, SecretState};
use super::index::{IndexKey, ReverseIndex};
use super::value_objects::{Exposure, StoreStats, SubmitResult};

/// All admitted secrets and the reverse index over their canonical forms.
#[derive(Debug)]
pub struct SecretLedger {
    lenses: LensSet,
    secrets: HashMap<SecretId, Secret>,
    index: ReverseIndex,
    /// Last sequence number handed out
    sequence: u64,
}

impl SecretLedger {
    pub fn new(lenses: LensSet) -> Self {
        Self {
            lenses,
            secrets: HashMap::new(),
            index: ReverseIndex::new(),
            sequence: 0,
        }
    }

    pub fn lenses(&self) -> &LensSet {
        &self.lenses
    }

    pub fn index(&self) -> &ReverseIndex {
        &self.index
    }

    pub fn get(&self, id: &SecretId) -> Option<&Secret> {
        self.secrets.get(id)
    }

    /// Secrets in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Secret> {
        self.secrets.values()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.secrets.len(),
            private: self.count(SecretState::Private),
            exposed: self.count(SecretState::Exposed),
            lenses: self.lenses.len(),
        }
    }

    /// Count of secrets in `state`.
    pub fn count(&self, state: SecretState) -> usize {
        self.secrets.values().filter(|s| s.state == state).count()
    }

    /// Submit `value` on behalf of `submitter` at time `now`.
    ///
    /// The value must already be validated as non-blank.
    pub fn submit(&mut self, value: &str, submitter: &str, now: DateTime<Utc>) -> SubmitResult {
        let forms = canonicalize(&self.lenses, value);

        if let Some(form) = forms.get(Palindrome::NAME).and_then(|f| f.first()) {
            let id = self.next_id(now);
            let secret = Secret::self_exposed(id.clone(), value, submitter, Palindrome::NAME, now);
            self.secrets.insert(id.clone(), secret.clone());
            return SubmitResult::self_exposed(
                secret,
                Exposure {
                    secret_id: id,
                    lens: Palindrome::NAME.to_string(),
                    canonical: form.clone(),
                    exposer: submitter.to_string(),
                },
            );
        }

        for (lens, form) in forms.pairs() {
            if lens == Palindrome::NAME {
                continue;
            }
            let Some(owner) = self.index.lookup(lens, form) else {
                continue;
            };
            let Some(existing) = self.secrets.get_mut(owner) else {
                continue;
            };
            if existing.expose(submitter, lens, now) {
                let exposure = Exposure {
                    secret_id: owner.clone(),
                    lens: lens.to_string(),
                    canonical: form.to_string(),
                    exposer: submitter.to_string(),
                };
                return SubmitResult::exposed(existing.clone(), exposure);
            }
        }

        let id = self.next_id(now);
        for (lens, form) in forms.pairs() {
            if lens != Palindrome::NAME {
                self.index.insert(IndexKey::new(lens, form), id.clone());
            }
        }
        let secret = Secret::private(id.clone(), value, submitter, now);
        self.secrets.insert(id, secret.clone());
        SubmitResult::admitted(secret)
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> SecretId {
        self.sequence += 1;
        SecretId::new(now.date_naive(), self.sequence)
    }
}

impl Default for SecretLedger {
    fn default() -> Self {
        Self::new(LensSet::builtin())
    }
}

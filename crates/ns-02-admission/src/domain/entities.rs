//! Core entities for the admission store.
//!
//! A secret is created once and only ever moves forward:
//!
//! ```text
//! [PRIVATE] ──collision──→ [EXPOSED]
//!                              ↑
//! (palindrome) ────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the form `sec_YYYYMMDD_NNNN`.
///
/// The date is the creation day (UTC); the counter is store-wide and never
/// resets, padded to at least four digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretId(String);

impl SecretId {
    /// Build an identifier from a creation date and sequence number.
    pub fn new(date: NaiveDate, sequence: u64) -> Self {
        Self(format!("sec_{}_{:04}", date.format("%Y%m%d"), sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SecretId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for SecretId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Lifecycle state. Transitions are Private → Exposed only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretState {
    #[default]
    Private,
    Exposed,
}

impl fmt::Display for SecretState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Exposed => f.write_str("exposed"),
        }
    }
}

/// A submitted secret.
///
/// INVARIANT: `exposed_by`, `exposed_via` and `exposed_at` are all `Some`
/// exactly when `state == Exposed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub id: SecretId,
    /// The original submitted value, unmodified
    pub value: String,
    pub submitted_by: String,
    pub state: SecretState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposed_by: Option<String>,
    /// Name of the lens (or `identity`) that caused the exposure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposed_via: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposed_at: Option<DateTime<Utc>>,
}

impl Secret {
    /// A freshly admitted private secret.
    pub fn private(id: SecretId, value: &str, submitted_by: &str, now: DateTime<Utc>) -> Self {
        Self {
            id,
            value: value.to_string(),
            submitted_by: submitted_by.to_string(),
            state: SecretState::Private,
            exposed_by: None,
            exposed_via: None,
            created_at: now,
            exposed_at: None,
        }
    }

    /// A secret that exposed itself on arrival.
    pub fn self_exposed(
        id: SecretId,
        value: &str,
        submitted_by: &str,
        via: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            value: value.to_string(),
            submitted_by: submitted_by.to_string(),
            state: SecretState::Exposed,
            exposed_by: Some(submitted_by.to_string()),
            exposed_via: Some(via.to_string()),
            created_at: now,
            exposed_at: Some(now),
        }
    }

    pub fn is_private(&self) -> bool {
        self.state == SecretState::Private
    }

    pub fn is_exposed(&self) -> bool {
        self.state == SecretState::Exposed
    }

    /// Transition Private → Exposed.
    ///
    /// Returns `false` and leaves the secret untouched if it is already exposed.
    pub(crate) fn expose(&mut self, by: &str, via: &str, at: DateTime<Utc>) -> bool {
        if self.is_exposed() {
            return false;
        }
        self.state = SecretState::Exposed;
        self.exposed_by = Some(by.to_string());
        self.exposed_via = Some(via.to_string());
        self.exposed_at = Some(at);
        true
    }
}

//! Value objects returned by the admission store.

use serde::{Deserialize, Serialize};

use super::entities::{Secret, SecretId};

pub const MSG_ADMITTED: &str = "Your secret is safe. No one has said this before.";
pub const MSG_SELF_EXPOSED: &str = "Self-betrayed! A palindrome reveals itself.";

/// Which of the three submission paths was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// A new private secret was stored and indexed
    Admitted,
    /// An existing private secret was exposed through `lens`
    ExposedExisting { lens: String },
    /// The submission exposed itself on arrival
    SelfExposed,
}

/// Details of an exposure event, for logging and metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exposure {
    pub secret_id: SecretId,
    pub lens: String,
    pub canonical: String,
    pub exposer: String,
}

/// Result of a single submission.
#[derive(Clone, Debug, Serialize)]
pub struct SubmitResult {
    /// The new secret, or the existing one that was just exposed
    pub secret: Secret,
    pub was_new: bool,
    pub self_exposure: bool,
    pub outcome: SubmitOutcome,
    pub message: String,
    /// Present on both exposure paths; never serialized
    #[serde(skip)]
    pub exposure: Option<Exposure>,
}

impl SubmitResult {
    pub(crate) fn admitted(secret: Secret) -> Self {
        Self {
            secret,
            was_new: true,
            self_exposure: false,
            outcome: SubmitOutcome::Admitted,
            message: MSG_ADMITTED.to_string(),
            exposure: None,
        }
    }

    pub(crate) fn exposed(secret: Secret, exposure: Exposure) -> Self {
        Self {
            secret,
            was_new: false,
            self_exposure: false,
            message: format!("Exposed! Someone already said this (via {}).", exposure.lens),
            outcome: SubmitOutcome::ExposedExisting {
                lens: exposure.lens.clone(),
            },
            exposure: Some(exposure),
        }
    }

    pub(crate) fn self_exposed(secret: Secret, exposure: Exposure) -> Self {
        Self {
            secret,
            was_new: false,
            self_exposure: true,
            outcome: SubmitOutcome::SelfExposed,
            message: MSG_SELF_EXPOSED.to_string(),
            exposure: Some(exposure),
        }
    }
}

/// Aggregate counts over the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total: usize,
    pub private: usize,
    pub exposed: usize,
    /// Configured lenses, identity excluded
    pub lenses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_exposure_not_serialized() {
        let secret = Secret::private(SecretId::from("sec_x"), "v", "bob", Utc::now());
        let result = SubmitResult::exposed(
            secret,
            Exposure {
                secret_id: SecretId::from("sec_x"),
                lens: "casefold".into(),
                canonical: "v".into(),
                exposer: "bob".into(),
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("exposure").is_none());
        assert_eq!(json["was_new"], false);
        assert_eq!(json["outcome"]["kind"], "exposed_existing");
        assert_eq!(json["outcome"]["lens"], "casefold");
        assert_eq!(
            json["message"],
            "Exposed! Someone already said this (via casefold)."
        );
    }
}

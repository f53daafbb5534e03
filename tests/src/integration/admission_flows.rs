//! # Admission Flows
//!
//! Canonicalization and admission together: which submissions collide, which
//! do not, and what the store looks like afterwards.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use ns_01_lens::{canonicalize, Lens, LensSet};
    use ns_02_admission::{
        AdmissionApi, AdmissionService, FixedTimeSource, SecretLedger, SecretState,
        SubmitOutcome,
    };
    use proptest::prelude::*;

    fn fixed_service(lenses: LensSet) -> AdmissionService<FixedTimeSource> {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        AdmissionService::with_clock(lenses, FixedTimeSource(now))
    }

    /// A lens that maps everything to the same form.
    struct Collapse;

    impl Lens for Collapse {
        fn name(&self) -> &'static str {
            "collapse"
        }

        fn canonicalize(&self, _input: &str) -> Vec<String> {
            vec!["*".to_string()]
        }
    }

    // =========================================================================
    // COLLISIONS ACROSS LENSES
    // =========================================================================

    #[test]
    fn test_each_builtin_lens_exposes() {
        let cases = [
            ("Hello", "HELLO", "casefold"),
            ("Straße", "STRASSE", "unicode_casefold"),
            ("hello", "68656c6c6f", "hexdecode"),
            ("cat", "\u{0441}at", "homoglyph"),
        ];

        for (first, second, lens) in cases {
            let service = AdmissionService::new();
            let admitted = service.submit(first, "alice");
            assert!(admitted.was_new, "{first}");

            let exposed = service.submit(second, "bob");
            assert!(!exposed.was_new, "{second} should collide with {first}");
            assert_eq!(
                exposed.outcome,
                SubmitOutcome::ExposedExisting {
                    lens: lens.to_string()
                },
                "{first} / {second}"
            );
            assert_eq!(exposed.secret.id, admitted.secret.id);
        }
    }

    #[test]
    fn test_unrelated_values_stay_private() {
        let service = AdmissionService::new();
        for value in ["apple", "banana", "cherry", "date"] {
            assert!(service.submit(value, "a").was_new);
        }
        let stats = service.stats();
        assert_eq!(stats.private, 4);
        assert_eq!(stats.exposed, 0);
    }

    #[test]
    fn test_exposure_is_permanent() {
        let service = AdmissionService::new();
        let id = service.submit("Hello", "alice").secret.id;
        service.submit("hello", "bob");

        // Later matches do not re-expose or change the exposer
        let third = service.submit("HELLO", "carol");
        let secret = service.get(&id).unwrap();
        assert_eq!(secret.state, SecretState::Exposed);
        assert_eq!(secret.exposed_by.as_deref(), Some("bob"));
        assert_ne!(third.secret.id, id);
        assert!(third.was_new);
    }

    #[test]
    fn test_palindromes_never_collide() {
        let service = AdmissionService::new();
        let first = service.submit("racecar", "alice");
        let second = service.submit("racecar", "bob");
        assert!(first.self_exposure);
        assert!(second.self_exposure);
        assert_ne!(first.secret.id, second.secret.id);
        assert_eq!(service.stats().exposed, 2);
    }

    #[test]
    fn test_custom_lens_set() {
        let service = fixed_service(LensSet::empty().with(Collapse));
        let first = service.submit("anything", "alice");
        let second = service.submit("something else", "bob");
        assert_eq!(first.secret.id.as_str(), "sec_20260314_0001");
        assert_eq!(
            second.outcome,
            SubmitOutcome::ExposedExisting {
                lens: "collapse".into()
            }
        );
        assert_eq!(service.stats().lenses, 1);
    }

    #[test]
    fn test_ids_follow_clock_and_sequence() {
        let service = fixed_service(LensSet::builtin());
        let ids: Vec<_> = ["one", "two", "three"]
            .iter()
            .map(|v| service.submit(v, "a").secret.id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["sec_20260314_0001", "sec_20260314_0002", "sec_20260314_0003"]
        );
    }

    #[test]
    fn test_admitted_forms_are_indexed() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let mut ledger = SecretLedger::new(LensSet::builtin());
        let value = "Mixed Case";
        let id = ledger.submit(value, "a", now).secret.id;

        let forms = canonicalize(ledger.lenses(), value);
        assert!(!forms.contains_lens("palindrome"));
        for (lens, form) in forms.pairs() {
            assert_eq!(ledger.index().lookup(lens, form), Some(&id), "{lens}:{form}");
        }
        assert_eq!(ledger.index().lookup("casefold", "mixed case"), Some(&id));
        assert_eq!(ledger.index().keys_owned_by(&id), forms.pairs().count());
        assert_eq!(ledger.index().len(), forms.pairs().count());
    }

    #[test]
    fn test_concurrent_distinct_submissions() {
        let service = Arc::new(AdmissionService::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        service.submit(&format!("thread {t} value {i}"), "worker");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = service.stats();
        assert_eq!(stats.total, 400);
        assert_eq!(stats.private, 400);

        let mut ids: Vec<_> = service.list().into_iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 400);
    }

    proptest! {
        #[test]
        fn prop_second_identical_submission_never_admits(value in "[a-z]{2,12}x") {
            prop_assume!(value.chars().rev().collect::<String>() != value);
            let service = AdmissionService::new();
            let first = service.submit(&value, "a");
            let second = service.submit(&value, "b");
            prop_assert!(first.was_new);
            prop_assert!(!second.was_new);
            prop_assert_eq!(second.secret.id, first.secret.id);
        }

        #[test]
        fn prop_stats_partition_total(values in proptest::collection::vec("[a-c]{1,4}", 1..40)) {
            let service = AdmissionService::new();
            for value in &values {
                service.submit(value, "a");
            }
            let stats = service.stats();
            prop_assert_eq!(stats.private + stats.exposed, stats.total);
            prop_assert_eq!(service.list().len(), stats.total);
        }

        #[test]
        fn prop_threaded_exposure_is_never_reverted(
            batches in proptest::collection::vec(
                proptest::collection::vec("[a-dA-D]{1,3}", 1..20),
                2..5,
            )
        ) {
            let service = Arc::new(AdmissionService::new());
            let handles: Vec<_> = batches
                .into_iter()
                .enumerate()
                .map(|(t, batch)| {
                    let service = Arc::clone(&service);
                    std::thread::spawn(move || {
                        let mut seen = Vec::new();
                        for value in &batch {
                            let result = service.submit(value, &format!("worker {t}"));
                            if result.secret.is_exposed() {
                                seen.push(result.secret.id);
                            }
                            // Earlier sightings must still hold mid-run
                            for id in &seen {
                                let current = service.get(id).map(|s| s.state);
                                assert_eq!(current, Some(SecretState::Exposed));
                            }
                        }
                        seen
                    })
                })
                .collect();

            let mut seen = Vec::new();
            for handle in handles {
                seen.extend(handle.join().unwrap());
            }

            for id in &seen {
                let secret = service.get(id);
                prop_assert!(secret.is_some());
                prop_assert_eq!(secret.map(|s| s.state), Some(SecretState::Exposed));
            }
            let stats = service.stats();
            prop_assert_eq!(stats.private + stats.exposed, stats.total);
        }
    }
}

//! # Wall Rotation
//!
//! The wall reading a live admission store: what becomes visible, when, and
//! in what order pages are handed out.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use ns_02_admission::{AdmissionApi, AdmissionService};
    use ns_03_wall::{Wall, WallConfig, WallPage};

    fn setup(page_size: usize) -> (Arc<AdmissionService>, Wall) {
        let store = Arc::new(AdmissionService::new());
        let config = WallConfig::default().with_page_size(page_size);
        let wall = Wall::new(store.clone(), config).unwrap();
        (store, wall)
    }

    #[test]
    fn test_private_secrets_never_shown() {
        let (store, wall) = setup(10);
        store.submit("hidden one", "a");
        store.submit("hidden two", "a");
        wall.refresh();
        assert_eq!(wall.page(), WallPage::empty());
    }

    #[test]
    fn test_exposed_by_collision_appears_with_original_value() {
        let (store, wall) = setup(10);
        store.submit("Hello", "alice");
        store.submit("hello", "bob");
        wall.refresh();

        let page = wall.page();
        assert_eq!(page.total_exposed, 1);
        // The wall shows the stored value, not the colliding submission
        assert_eq!(page.text, "Hello");
    }

    #[test]
    fn test_self_exposed_appears() {
        let (store, wall) = setup(10);
        store.submit("A man, a plan, a canal: Panama", "a");
        wall.refresh();
        assert_eq!(wall.page().text, "A man, a plan, a canal: Panama");
    }

    #[test]
    fn test_pages_cover_every_exposed_value_once() {
        let (store, wall) = setup(4);
        let palindromes = [
            "level", "noon", "civic", "radar", "refer", "rotor", "kayak", "madam", "stats",
            "tenet",
        ];
        for value in palindromes {
            store.submit(value, "a");
        }
        store.submit("private stays private", "a");
        let snapshot = wall.refresh();
        assert_eq!(snapshot.total_exposed, 10);
        assert_eq!(snapshot.total_pages, 3);

        let mut seen = HashSet::new();
        for _ in 0..snapshot.total_pages {
            for line in wall.page().text.lines() {
                assert!(seen.insert(line.to_string()), "duplicate {line}");
            }
        }
        let expected: HashSet<String> = palindromes.iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_cache_lags_store_until_refresh() {
        let (store, wall) = setup(10);
        store.submit("racecar", "a");
        assert_eq!(wall.snapshot().total_exposed, 0);
        wall.refresh();
        assert_eq!(wall.snapshot().total_exposed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_background_refresh_follows_store() {
        let store = Arc::new(AdmissionService::new());
        let config = WallConfig::default()
            .with_page_size(2)
            .with_refresh_interval(Duration::from_secs(5));
        let wall = Arc::new(Wall::new(store.clone(), config).unwrap());
        let refresher = Arc::clone(&wall).spawn_refresher();

        for value in ["level", "noon", "civic"] {
            store.submit(value, "a");
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(wall.snapshot().total_exposed, 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        let snapshot = wall.snapshot();
        assert_eq!(snapshot.total_exposed, 3);
        assert_eq!(snapshot.total_pages, 2);

        refresher.stop().await;
    }
}

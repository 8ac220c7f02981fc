//! Integration tests for preference storage
//!
//! Tests the file-backed store used by native builds and the theme round trip

use sova::storage::{LocalPreferences, PreferenceStore, THEME_KEY};
use sova::types::ThemeMode;

mod local_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalPreferences::at(dir.path());

        store.set(THEME_KEY, "dark").expect("Failed to set theme");
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_get_nonexistent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalPreferences::at(dir.path().join("not-created-yet"));
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalPreferences::at(dir.path());

        store.set(THEME_KEY, "dark").expect("Failed to set");
        store.set(THEME_KEY, "light").expect("Failed to overwrite");
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalPreferences::at(dir.path());

        store.set(THEME_KEY, "dark").expect("Failed to set");
        store.remove(THEME_KEY).expect("Failed to remove");
        assert!(store.get(THEME_KEY).is_none());

        // removing twice is fine
        store.remove(THEME_KEY).expect("Failed to remove again");
    }

    #[test]
    fn test_special_characters_in_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalPreferences::at(dir.path());

        store.set("../escape", "nope").expect("Failed to set");
        assert_eq!(store.get("../escape"), Some("nope".to_string()));
        assert!(dir.path().join("___escape").exists());
    }

    #[test]
    fn test_stores_are_isolated_by_root() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        let a = LocalPreferences::at(first.path());
        let b = LocalPreferences::at(second.path());

        a.set(THEME_KEY, "dark").expect("Failed to set");
        assert!(b.get(THEME_KEY).is_none());
    }
}

mod theme_tests {
    use super::*;

    #[test]
    fn test_persisted_theme_survives_reload() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = LocalPreferences::at(dir.path());
        store
            .set(THEME_KEY, ThemeMode::Dark.as_str())
            .expect("Failed to set");

        let reloaded = LocalPreferences::at(dir.path());
        assert_eq!(
            ThemeMode::from_stored(reloaded.get(THEME_KEY).as_deref()),
            ThemeMode::Dark
        );
    }
}

//! Saved lives survive closing and reopening the store.

use tempfile::tempdir;
use victory_road::storage::TravelerStore;

#[test]
fn save_then_load_returns_same_lives() {
    for lives in [0u32, 1, 3, 10] {
        let tmp = tempdir().unwrap();
        {
            let store = TravelerStore::open(tmp.path()).unwrap();
            store.save_lives("Traveler1", lives).unwrap();
            store.close().unwrap();
        }
        let store = TravelerStore::open(tmp.path()).unwrap();
        assert_eq!(
            store.load_lives("Traveler1").unwrap(),
            Some(lives),
            "lives={} should round-trip",
            lives
        );
    }
}

#[test]
fn dropped_store_still_persists() {
    let tmp = tempdir().unwrap();
    {
        let store = TravelerStore::open(tmp.path()).unwrap();
        store.save_lives("Traveler1", 7).unwrap();
        // no explicit close: drop releases the handle
    }
    let store = TravelerStore::open(tmp.path()).unwrap();
    assert_eq!(store.load_lives("Traveler1").unwrap(), Some(7));
}

#[test]
fn travelers_are_independent() {
    let tmp = tempdir().unwrap();
    let store = TravelerStore::open(tmp.path()).unwrap();
    store.save_lives("Traveler1", 2).unwrap();
    store.save_lives("Traveler2", 9).unwrap();
    assert_eq!(store.load_lives("Traveler1").unwrap(), Some(2));
    assert_eq!(store.load_lives("Traveler2").unwrap(), Some(9));
    let mut names = store.list_travelers().unwrap();
    names.sort();
    assert_eq!(names, vec!["traveler1".to_string(), "traveler2".to_string()]);
}

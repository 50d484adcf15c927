use super::*;

struct FullStore;

impl SessionStore for FullStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }
}

fn ada() -> UserProfile {
    UserProfile::new(Some("Ada"), Some("ada@x.com"))
}

// =============================================================
// record
// =============================================================

#[test]
fn record_writes_json_under_user_info_key() {
    let store = MemoryStore::new();
    record(&store, &ada()).unwrap();
    assert_eq!(store.raw("userInfo").as_deref(), Some(r#"{"name":"Ada","email":"ada@x.com"}"#));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn record_overwrites_previous_profile() {
    let store = MemoryStore::new();
    record(&store, &ada()).unwrap();
    let bo = UserProfile::new(None, Some("bo@x.com"));
    record(&store, &bo).unwrap();
    assert_eq!(load(&store), Some(bo));
    assert_eq!(store.write_count(), 2);
}

#[test]
fn record_surfaces_backend_failure() {
    let err = record(&FullStore, &ada()).unwrap_err();
    assert!(matches!(err, StorageError::Write(ref msg) if msg.contains("Quota")));
}

#[test]
fn record_does_not_validate_profile_shape() {
    let store = MemoryStore::new();
    record(&store, &UserProfile::default()).unwrap();
    assert_eq!(store.raw(USER_INFO_KEY).as_deref(), Some("{}"));
}

// =============================================================
// load
// =============================================================

#[test]
fn load_empty_store_is_none() {
    assert_eq!(load(&MemoryStore::new()), None);
}

#[test]
fn load_malformed_record_is_none() {
    let store = MemoryStore::new();
    store.set_item(USER_INFO_KEY, "not json").unwrap();
    assert_eq!(load(&store), None);
}

#[test]
fn load_reads_back_recorded_profile() {
    let store = MemoryStore::new();
    record(&store, &ada()).unwrap();
    assert_eq!(load(&store), Some(ada()));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    assert!(matches!(BrowserStorage.set_item("k", "v"), Err(StorageError::Unavailable)));
    assert!(matches!(BrowserStorage.get_item("k"), Err(StorageError::Unavailable)));
    assert_eq!(load(&BrowserStorage), None);
}

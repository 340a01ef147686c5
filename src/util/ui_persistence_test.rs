use super::*;
use crate::state::session::MemoryStorage;

#[test]
fn profile_draft_key_is_scoped_per_user() {
    assert_eq!(profile_draft_key("u1"), "mentee_profile:u1");
    assert_ne!(profile_draft_key("u1"), profile_draft_key("u2"));
}

#[test]
fn save_then_load_json() {
    let mut storage = MemoryStorage::default();
    save_json(&mut storage, "k", &vec!["a".to_owned(), "b".to_owned()]);
    let loaded: Option<Vec<String>> = load_json(&mut storage, "k");
    assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn load_json_missing_key_is_none() {
    let mut storage = MemoryStorage::default();
    assert_eq!(load_json::<Vec<String>, _>(&mut storage, "missing"), None);
}

#[test]
fn load_json_drops_corrupt_value() {
    let mut storage = MemoryStorage::default();
    storage.set("k", "[oops");
    assert_eq!(load_json::<Vec<String>, _>(&mut storage, "k"), None);
    assert!(!storage.contains("k"));
}

#[test]
fn profile_draft_falls_back_to_fresh_profile() {
    let mut storage = MemoryStorage::default();
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: Some("Ada".to_owned()), role: None };
    let profile = load_profile_draft(&mut storage, &user);
    assert_eq!(profile, MenteeProfile::for_user(&user));
}

#[test]
fn profile_draft_round_trips_per_user() {
    let mut storage = MemoryStorage::default();
    let ada = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: Some("Ada".to_owned()), role: None };
    let bob = User { id: "u2".to_owned(), email: "b@b.com".to_owned(), name: None, role: None };
    let mut draft = MenteeProfile::for_user(&ada);
    draft.bio = "Learning Rust".to_owned();
    save_profile_draft(&mut storage, &ada, &draft);

    assert_eq!(load_profile_draft(&mut storage, &ada).bio, "Learning Rust");
    assert!(load_profile_draft(&mut storage, &bob).bio.is_empty());
}

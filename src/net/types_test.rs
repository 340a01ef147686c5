use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_underscore_id_and_numeric_ids() {
    let user: User = serde_json::from_str(r#"{"_id":"abc","email":"a@b.com","role":"admin"}"#).unwrap();
    assert_eq!(user.id, "abc");
    assert!(user.is_admin());

    let user: User = serde_json::from_str(r#"{"id":42,"email":"a@b.com"}"#).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.role, None);
    assert!(!user.is_admin());
}

#[test]
fn user_with_both_id_keys_prefers_id() {
    let user: User =
        serde_json::from_str(r#"{"_id":"mongo-1","id":"u1","email":"a@b.c","role":"admin"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.is_admin());

    let user: User = serde_json::from_str(r#"{"_id":"mongo-1","id":"","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.id, "mongo-1");
}

#[test]
fn user_without_any_id_is_rejected() {
    let err = serde_json::from_str::<User>(r#"{"email":"a@b.c"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `id`"), "{err}");
}

#[test]
fn user_null_optionals_read_as_absent() {
    let user: User = serde_json::from_str(r#"{"id":"u1","email":"a@b.c","name":null,"role":null}"#).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.role, None);
}

#[test]
fn stored_user_decodes_back_to_itself() {
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: Some("Ada".to_owned()), role: None };
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

#[test]
fn user_serializes_without_absent_optionals() {
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: None, role: None };
    assert_eq!(serde_json::to_value(&user).unwrap(), serde_json::json!({ "id": "u1", "email": "a@b.com" }));
}

#[test]
fn user_display_name_falls_back_to_email() {
    let mut user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: Some("  ".to_owned()), role: None };
    assert_eq!(user.display_name(), "a@b.com");
    user.name = Some("Ada".to_owned());
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn login_response_decodes_token_and_user() {
    let body = r#"{"token":"t-1","user":{"id":"u1","name":"Ada","email":"ada@example.com","role":"mentee"}}"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "t-1");
    assert_eq!(resp.user.role.as_deref(), Some("mentee"));
}

// =============================================================
// Mentor
// =============================================================

#[test]
fn mentor_tolerates_sparse_records() {
    let mentor: Mentor = serde_json::from_str(r#"{"_id":"m1","name":"Sam","experience":7,"hourlyRate":50}"#).unwrap();
    assert_eq!(mentor.id, "m1");
    assert_eq!(mentor.experience, "7");
    assert_eq!(mentor.hourly_rate, Some(50.0));
    assert!(mentor.skills.is_empty());
    assert!(mentor.bio.is_empty());
}

#[test]
fn mentor_with_both_id_keys_decodes() {
    let mentor: Mentor = serde_json::from_str(r#"{"_id":"a1","id":"a1","name":"Ada","skills":["Rust"]}"#).unwrap();
    assert_eq!(mentor.id, "a1");
    assert_eq!(mentor.skills, vec!["Rust".to_owned()]);
}

#[test]
fn mentor_nulls_read_as_empty() {
    let mentor: Mentor =
        serde_json::from_str(r#"{"_id":"a1","name":null,"bio":null,"skills":null,"experience":null,"location":null}"#)
            .unwrap();
    assert_eq!(mentor.id, "a1");
    assert!(mentor.name.is_empty());
    assert!(mentor.bio.is_empty());
    assert!(mentor.skills.is_empty());
    assert!(mentor.experience.is_empty());
    assert_eq!(mentor.location, None);
}

#[test]
fn mentor_numbers_may_arrive_as_strings() {
    let mentor: Mentor = serde_json::from_str(r#"{"_id":"a1","hourlyRate":"50","rating":" 4.5 "}"#).unwrap();
    assert_eq!(mentor.hourly_rate, Some(50.0));
    assert_eq!(mentor.rating, Some(4.5));

    let mentor: Mentor = serde_json::from_str(r#"{"_id":"a1","hourlyRate":"","rating":"n/a"}"#).unwrap();
    assert_eq!(mentor.hourly_rate, None);
    assert_eq!(mentor.rating, None);
}

#[test]
fn mentor_experience_years_reads_leading_number() {
    let mut mentor = Mentor { experience: "8".to_owned(), ..Mentor::default() };
    assert_eq!(mentor.experience_years(), Some(8));
    mentor.experience = "3-5".to_owned();
    assert_eq!(mentor.experience_years(), Some(3));
    mentor.experience = "15+".to_owned();
    assert_eq!(mentor.experience_years(), Some(15));
    mentor.experience = "senior".to_owned();
    assert_eq!(mentor.experience_years(), None);
}

#[test]
fn mentor_initial_and_first_name_have_fallbacks() {
    let mentor = Mentor { name: "emily Rodriguez".to_owned(), ..Mentor::default() };
    assert_eq!(mentor.initial(), 'E');
    assert_eq!(mentor.first_name(), "emily");

    let unnamed = Mentor::default();
    assert_eq!(unnamed.initial(), 'M');
    assert_eq!(unnamed.first_name(), "Mentor");
}

// =============================================================
// MentorListResponse
// =============================================================

#[test]
fn mentor_list_accepts_bare_array() {
    let resp: MentorListResponse = serde_json::from_str(r#"[{"id":"1","name":"A"}]"#).unwrap();
    assert_eq!(resp.into_mentors().len(), 1);
}

#[test]
fn mentor_list_accepts_mentors_envelope() {
    let resp: MentorListResponse =
        serde_json::from_str(r#"{"success":true,"mentors":[{"id":"1"},{"id":"2"}]}"#).unwrap();
    let ids: Vec<String> = resp.into_mentors().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn mentor_list_accepts_data_envelope() {
    let resp: MentorListResponse = serde_json::from_str(r#"{"data":[{"id":"9"}]}"#).unwrap();
    assert_eq!(resp.into_mentors()[0].id, "9");
}

#[test]
fn mentor_list_rejects_other_shapes() {
    assert!(serde_json::from_str::<MentorListResponse>(r#"{"items":[]}"#).is_err());
    assert!(serde_json::from_str::<MentorListResponse>(r#""nope""#).is_err());
}

#[test]
fn new_mentor_serializes_all_form_fields() {
    let form = NewMentor {
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        availability: "AVAILABLE".to_owned(),
        bio: "bio".to_owned(),
        topic: "Rust".to_owned(),
        password: "pw".to_owned(),
        experience: "5".to_owned(),
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["availability"], "AVAILABLE");
    assert_eq!(value.as_object().unwrap().len(), 7);
}

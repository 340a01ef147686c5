use super::*;

fn client() -> ApiClient {
    ApiClient::new(&AppConfig::from_values(Some("https://api.example.test/"), None))
}

#[test]
fn endpoint_joins_origin_and_path() {
    assert_eq!(client().endpoint(LOGIN_PATH), "https://api.example.test/api/auth/login");
    assert_eq!(client().endpoint(MENTORS_PATH), "https://api.example.test/api/get-mentors");
}

#[test]
fn delete_mentor_path_embeds_id() {
    assert_eq!(delete_mentor_path("m-7"), "/api/deleteMentor/m-7");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn with_token_attaches_and_clears_token() {
    let authed = client().with_token(Some("tok".to_owned()));
    assert_eq!(authed.token(), Some("tok"));
    assert_eq!(authed.base_url(), "https://api.example.test");
    assert_eq!(authed.with_token(None).token(), None);
}

#[test]
fn only_200_and_201_count_as_created() {
    assert!(is_created(200));
    assert!(is_created(201));
    assert!(!is_created(202));
    assert!(!is_created(204));
}

#[test]
fn parse_mentor_list_normalizes_every_envelope() {
    assert_eq!(parse_mentor_list(r#"[{"id":"1"}]"#).unwrap().len(), 1);
    assert_eq!(parse_mentor_list(r#"{"mentors":[{"id":"1"},{"id":"2"}]}"#).unwrap().len(), 2);
    assert_eq!(parse_mentor_list(r#"{"data":[]}"#).unwrap().len(), 0);
}

#[test]
fn parse_mentor_list_keeps_loosely_typed_records() {
    let mentors = parse_mentor_list(r#"[{"_id":"a1","id":"a1","name":"Ada","skills":["Rust"]}]"#).unwrap();
    assert_eq!(mentors[0].id, "a1");

    let mentors = parse_mentor_list(r#"{"mentors":[{"_id":"a1","name":"Ada","skills":null}]}"#).unwrap();
    assert!(mentors[0].skills.is_empty());

    let mentors = parse_mentor_list(r#"[{"_id":"a1","name":"Ada","hourlyRate":"50"},{"id":"b2","name":"Bo"}]"#).unwrap();
    assert_eq!(mentors.len(), 2);
    assert_eq!(mentors[0].hourly_rate, Some(50.0));
}

#[test]
fn parse_mentor_list_flags_unexpected_shape() {
    assert_eq!(parse_mentor_list(r#"{"result":[]}"#), Err(ApiError::UnexpectedShape));
}

#[test]
fn parse_mentor_list_flags_non_json() {
    assert!(matches!(parse_mentor_list("<html>"), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = client();
    assert_eq!(futures::executor::block_on(api.fetch_mentors()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.logout()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.delete_mentor("m1")), Err(ApiError::Unavailable));
}

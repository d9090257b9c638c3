use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    assert_eq!(serde_json::to_string(&Role::Leader).unwrap(), "\"LEADER\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"OWNER\"").is_err());
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_reads_server_field_names() {
    let raw = r#"{
        "accessToken": "acc",
        "refreshToken": "ref",
        "role": "LEADER",
        "clubUUID": "club-1",
        "isAgreedTerms": true
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "acc");
    assert_eq!(resp.refresh_token, "ref");
    assert_eq!(resp.role, Role::Leader);
    assert_eq!(resp.club_uuid.as_deref(), Some("club-1"));
    assert!(resp.is_agreed_terms);
}

#[test]
fn login_response_defaults_optional_fields() {
    let raw = r#"{"accessToken": "acc", "role": "ADMIN"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.refresh_token, "");
    assert_eq!(resp.club_uuid, None);
    assert!(!resp.is_agreed_terms);
}

#[test]
fn login_response_tokens_copies_pair() {
    let resp = LoginResponse {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        role: Role::Admin,
        club_uuid: None,
        is_agreed_terms: false,
    };
    assert_eq!(resp.tokens(), TokenPair { access_token: "a".to_owned(), refresh_token: "r".to_owned() });
}

// =============================================================
// Requests
// =============================================================

#[test]
fn login_request_serializes_camel_case() {
    let req = LoginRequest { account: "leader".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"account": "leader", "password": "pw"})
    );
}

#[test]
fn refresh_request_serializes_camel_case() {
    let req = RefreshRequest { refresh_token: "r".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"refreshToken": "r"}));
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}

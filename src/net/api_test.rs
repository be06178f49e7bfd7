use super::*;

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_success_body_to_login_response() {
    let resp: LoginResponse =
        decode_response(true, r#"{"access_token":"t1","user_id":"u1"}"#, "login failed")
            .expect("login response");
    assert_eq!(resp.access_token, "t1");
    assert_eq!(resp.user_id, "u1");
}

#[test]
fn decode_failure_surfaces_server_error_message() {
    let err = decode_response::<LoginResponse>(false, r#"{"error":"bad credentials"}"#, "login failed")
        .expect_err("401 body");
    assert_eq!(err, ApiError::Server("bad credentials".to_owned()));
    assert_eq!(err.to_string(), "bad credentials");
}

#[test]
fn decode_failure_without_error_field_uses_fallback() {
    let err = decode_response::<Value>(false, r#"{"detail":"nope"}"#, "registration failed")
        .expect_err("error body");
    assert_eq!(err, ApiError::Server("registration failed".to_owned()));
}

#[test]
fn decode_failure_with_non_json_body_uses_fallback() {
    let err = decode_response::<Value>(false, "<html>502</html>", "logout failed")
        .expect_err("error body");
    assert_eq!(err, ApiError::Server("logout failed".to_owned()));
}

#[test]
fn decode_success_with_unparseable_body_is_a_network_error() {
    let err = decode_response::<LoginResponse>(true, r#"{"access_token":"t1"}"#, "login failed")
        .expect_err("missing user_id");
    assert!(matches!(err, ApiError::Network(_)));
}

// =============================================================
// ApiError / ApiClient
// =============================================================

#[test]
fn network_error_display_is_prefixed() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn client_defaults_to_local_backend() {
    assert_eq!(ApiClient::default().base_url, DEFAULT_BASE_URL);
    assert_eq!(
        ApiClient::new("https://grimoire.example/api").base_url,
        "https://grimoire.example/api"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn client_is_unavailable_off_browser() {
    let client = ApiClient::default();
    let err = futures::executor::block_on(client.login("mara", "pw", false))
        .expect_err("native stub");
    assert_eq!(err, ApiError::Unavailable);
}

use vibestream::spotify::auth::{SCOPES, SpotifyAuth, basic_auth_header};

fn test_flow() -> SpotifyAuth {
    SpotifyAuth::new(
        "https://accounts.example.com/authorize".to_string(),
        "https://accounts.example.com/api/token".to_string(),
        "client-123".to_string(),
        "secret-456".to_string(),
        "http://127.0.0.1:5173/callback".to_string(),
    )
}

#[test]
fn test_authorize_url_contains_redirect_uri_verbatim() {
    let url = test_flow().authorize_url();

    assert!(url.contains("redirect_uri=http://127.0.0.1:5173/callback"));
}

#[test]
fn test_authorize_url_contains_all_scopes_verbatim() {
    let url = test_flow().authorize_url();

    for scope in SCOPES {
        assert!(url.contains(scope), "missing scope: {}", scope);
    }
}

#[test]
fn test_authorize_url_is_code_grant_against_configured_endpoint() {
    let url = test_flow().authorize_url();

    assert!(url.starts_with("https://accounts.example.com/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=client-123"));
    // The client secret never appears in the browser-facing URL.
    assert!(!url.contains("secret-456"));
}

#[test]
fn test_basic_auth_header() {
    // base64("id:secret")
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
}

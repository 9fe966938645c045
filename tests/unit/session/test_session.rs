use tradeit_client::error::AppError;
use tradeit_client::session::interface::{SessionProvider, SharedSession, StaticSession};
use tradeit_client::session::token::SessionToken;

#[test]
fn blank_tokens_are_rejected() {
    assert!(matches!(SessionToken::new(""), Err(AppError::InvalidInput(_))));
    assert!(matches!(SessionToken::new("  \t"), Err(AppError::InvalidInput(_))));
    assert!(SessionToken::try_from("abc").is_ok());
    assert!(SessionToken::try_from(String::new()).is_err());
}

#[test]
fn static_session_always_returns_its_token() {
    let provider = StaticSession::new(SessionToken::new("fixed").unwrap());
    assert_eq!(provider.current_session_token().unwrap().as_str(), "fixed");
    assert_eq!(provider.current_session_token().unwrap().as_str(), "fixed");
}

#[test]
fn empty_shared_session_is_unauthorized() {
    let provider = SharedSession::new();
    assert!(matches!(
        provider.current_session_token(),
        Err(AppError::Unauthorized)
    ));
}

#[test]
fn shared_session_rotation_is_seen_by_clones() {
    let provider = SharedSession::with_token(SessionToken::new("first").unwrap());
    let handle = provider.clone();

    handle.replace(SessionToken::new("second").unwrap()).unwrap();
    assert_eq!(provider.current_session_token().unwrap().as_str(), "second");

    handle.clear().unwrap();
    assert!(matches!(
        provider.current_session_token(),
        Err(AppError::Unauthorized)
    ));
}

#[test]
fn token_debug_output_is_redacted() {
    let provider = StaticSession::new(SessionToken::new("top-secret").unwrap());
    let rendered = format!("{provider:?}");
    assert!(!rendered.contains("top-secret"));
}

#[test]
fn blank_token_cannot_be_deserialized() {
    assert!(serde_json::from_str::<SessionToken>("\"  \"").is_err());
    assert!(serde_json::from_str::<SessionToken>("\"\"").is_err());

    let token: SessionToken = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(token.as_str(), "abc");
    assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc\"");
}

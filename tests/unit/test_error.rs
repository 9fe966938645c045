use std::error::Error;
use tradeit_client::error::{AppError, LegError, ValidationError, ValidationErrors};

#[test]
fn validation_error_messages() {
    assert_eq!(
        ValidationError::MissingRequiredField {
            field: "accountNumber"
        }
        .to_string(),
        "missing required field: accountNumber"
    );
    assert_eq!(
        ValidationError::InvalidPage(0).to_string(),
        "invalid page 0: pages start at 1"
    );
    assert_eq!(
        ValidationError::EmptyOrderLegs.to_string(),
        "order must contain at least one leg"
    );
    assert_eq!(
        ValidationError::InvalidEnumValue {
            field: "orderType",
            value: "trailing".to_string(),
            allowed: &["market", "limit", "stop"],
        }
        .to_string(),
        "invalid value 'trailing' for orderType (expected one of: market, limit, stop)"
    );
}

#[test]
fn leg_error_is_reported_with_its_index() {
    let error = ValidationError::InvalidLeg {
        index: 2,
        errors: vec![LegError::MissingInstrument, LegError::MissingPrice],
    };
    assert_eq!(
        error.to_string(),
        "invalid order leg 2: pair is required, rate is required for limit and stop legs"
    );
}

#[test]
fn collected_errors_join_with_semicolons() {
    let mut errors = ValidationErrors::new();
    assert!(errors.is_empty());
    errors.push(ValidationError::EmptyOrderLegs);
    errors.push(ValidationError::InvalidPage(-1));

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.to_string(),
        "order must contain at least one leg; invalid page -1: pages start at 1"
    );
    assert!(errors.clone().into_result().is_err());
    assert!(ValidationErrors::new().into_result().is_ok());
}

#[test]
fn app_error_display() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(
        AppError::InvalidInput("bad".to_string()).to_string(),
        "invalid input: bad"
    );
    assert_eq!(
        AppError::Broker {
            code: Some(300),
            short_message: "Could Not Fetch Positions".to_string(),
            long_messages: vec!["Try again.".to_string()],
        }
        .to_string(),
        "broker error 300: Could Not Fetch Positions (Try again.)"
    );
    assert_eq!(
        AppError::Unexpected(reqwest::StatusCode::BAD_GATEWAY).to_string(),
        "unexpected http status: 502 Bad Gateway"
    );
}

#[test]
fn validation_errors_convert_and_keep_their_source() {
    let errors = ValidationErrors::from(vec![ValidationError::EmptyOrderLegs]);
    let error: AppError = errors.into();
    assert!(matches!(error, AppError::Validation(_)));
    assert!(error.source().is_some());
    assert_eq!(
        error.to_string(),
        "validation failed: order must contain at least one leg"
    );
}

#[test]
fn from_json_and_io_errors() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));

    let io_error = std::io::Error::other("disk full");
    let error: AppError = io_error.into();
    assert!(error.to_string().contains("disk full"));
}

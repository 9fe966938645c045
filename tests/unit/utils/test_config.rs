use std::env;
use tradeit_client::config::Config;
use tradeit_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TRADEIT_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TRADEIT_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TRADEIT_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("TRADEIT_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("TRADEIT_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_trims_whitespace() {
    unsafe {
        env::set_var("TRADEIT_TEST_VAR_PADDED", "  45 ");
        let result: u64 = get_env_or_default("TRADEIT_TEST_VAR_PADDED", 30);
        assert_eq!(result, 45);
        env::remove_var("TRADEIT_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TRADEIT_TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("TRADEIT_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("TRADEIT_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TRADEIT_TEST_VAR_OPTION", "123");
        let present: Option<i32> = get_env_or_none("TRADEIT_TEST_VAR_OPTION");
        assert_eq!(present, Some(123));
        env::remove_var("TRADEIT_TEST_VAR_OPTION");
    }
    let missing: Option<i32> = get_env_or_none("TRADEIT_TEST_VAR_OPTION_MISSING");
    assert_eq!(missing, None);
}

#[test]
fn test_config_with_base_url_trims_trailing_slash() {
    let config = Config::with_base_url("http://localhost:8080/api/v1/");
    assert_eq!(config.rest_api.base_url, "http://localhost:8080/api/v1");
    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.default_account_number, None);
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("http://localhost");
    let rendered = config.to_string();
    assert!(rendered.contains("\"base_url\":\"http://localhost\""));
}

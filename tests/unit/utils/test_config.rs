use gencove_client::config::Credentials;
use gencove_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_returns_default_when_missing() {
    let value: u64 = get_env_or_default("GENCOVE_TEST_MISSING_VAR", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe {
        env::set_var("GENCOVE_TEST_PARSE_VAR", "7");
    }
    let value: u64 = get_env_or_default("GENCOVE_TEST_PARSE_VAR", 42);
    assert_eq!(value, 7);
    unsafe {
        env::remove_var("GENCOVE_TEST_PARSE_VAR");
    }
}

#[test]
fn test_get_env_or_default_falls_back_on_parse_error() {
    unsafe {
        env::set_var("GENCOVE_TEST_BAD_VAR", "not-a-number");
    }
    let value: u64 = get_env_or_default("GENCOVE_TEST_BAD_VAR", 42);
    assert_eq!(value, 42);
    unsafe {
        env::remove_var("GENCOVE_TEST_BAD_VAR");
    }
}

#[test]
fn test_get_env_or_none() {
    assert_eq!(get_env_or_none::<u64>("GENCOVE_TEST_NONE_VAR"), None);

    unsafe {
        env::set_var("GENCOVE_TEST_SOME_VAR", "19");
    }
    assert_eq!(get_env_or_none::<u64>("GENCOVE_TEST_SOME_VAR"), Some(19));
    unsafe {
        env::remove_var("GENCOVE_TEST_SOME_VAR");
    }
}

#[test]
fn test_api_key_takes_precedence_over_login_credentials() {
    unsafe {
        env::set_var("GENCOVE_API_KEY", "test-api-key");
        env::set_var("GENCOVE_EMAIL", "user@example.com");
        env::set_var("GENCOVE_PASSWORD", "secret");
    }

    let credentials = Credentials::from_env();
    match credentials {
        Credentials::ApiKey(key) => assert_eq!(key, "test-api-key"),
        other => panic!("Unexpected credentials: {other:?}"),
    }

    unsafe {
        env::remove_var("GENCOVE_API_KEY");
        env::remove_var("GENCOVE_EMAIL");
        env::remove_var("GENCOVE_PASSWORD");
    }
}

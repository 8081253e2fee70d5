use std::env;
use v20_client::presentation::primitives::AcceptDatetimeFormat;
use v20_client::utils::config::{get_env_list, get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe {
        env::set_var("V20_TEST_TIMEOUT", " 45 ");
        let result: u64 = get_env_or_default("V20_TEST_TIMEOUT", 30);
        assert_eq!(result, 45);
        env::remove_var("V20_TEST_TIMEOUT");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("V20_TEST_MISSING");
        let result: String = get_env_or_default("V20_TEST_MISSING", "fallback".to_string());
        assert_eq!(result, "fallback");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("V20_TEST_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("V20_TEST_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("V20_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_enum() {
    unsafe {
        env::set_var("V20_TEST_DATETIME_FORMAT", "UNIX");
        let result = get_env_or_default("V20_TEST_DATETIME_FORMAT", AcceptDatetimeFormat::Rfc3339);
        assert_eq!(result, AcceptDatetimeFormat::Unix);
        env::remove_var("V20_TEST_DATETIME_FORMAT");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("V20_TEST_OPTION", "123");
        env::set_var("V20_TEST_OPTION_BAD", "x");
        env::remove_var("V20_TEST_OPTION_MISSING");
        assert_eq!(get_env_or_none::<i32>("V20_TEST_OPTION"), Some(123));
        assert_eq!(get_env_or_none::<i32>("V20_TEST_OPTION_BAD"), None);
        assert_eq!(get_env_or_none::<i32>("V20_TEST_OPTION_MISSING"), None);
        env::remove_var("V20_TEST_OPTION");
        env::remove_var("V20_TEST_OPTION_BAD");
    }
}

#[test]
fn test_get_env_list_trims_and_drops_empty() {
    unsafe {
        env::set_var("V20_TEST_INSTRUMENTS", " EUR_USD, ,USD_JPY ,");
        assert_eq!(
            get_env_list("V20_TEST_INSTRUMENTS"),
            vec!["EUR_USD".to_string(), "USD_JPY".to_string()]
        );
        env::remove_var("V20_TEST_INSTRUMENTS");
        assert!(get_env_list("V20_TEST_INSTRUMENTS").is_empty());
    }
}

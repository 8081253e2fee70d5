use serde_json::json;
use v20_client::error::AppError;
use v20_client::utils::template::{expand_path, render_json_template, render_template};

#[test]
fn test_expand_path_with_every_parameter() {
    let path = expand_path(
        "/v3/accounts/{accountID}/trades/{tradeSpecifier}/close",
        &[("accountID", "101-004-1-001"), ("tradeSpecifier", "@abc")],
    )
    .unwrap();
    assert_eq!(path, "/v3/accounts/101-004-1-001/trades/@abc/close");
}

#[test]
fn test_expand_path_ignores_extra_parameters() {
    let path = expand_path("/v3/accounts", &[("accountID", "1")]).unwrap();
    assert_eq!(path, "/v3/accounts");
}

#[test]
fn test_expand_path_missing_parameter() {
    let err = expand_path("/v3/instruments/{instrument}/candles", &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.to_string().contains("instrument"));
}

#[test]
fn test_expand_path_encodes_client_specifiers() {
    let path = expand_path(
        "/v3/accounts/{accountID}/orders/{orderSpecifier}",
        &[("accountID", "001"), ("orderSpecifier", "@ord#1")],
    )
    .unwrap();
    assert_eq!(path, "/v3/accounts/001/orders/@ord%231");

    let path = expand_path(
        "/v3/accounts/{accountID}/trades/{tradeSpecifier}/close",
        &[("accountID", "001"), ("tradeSpecifier", "@a?b")],
    )
    .unwrap();
    assert_eq!(path, "/v3/accounts/001/trades/@a%3Fb/close");
}

#[test]
fn test_expand_path_rejects_dot_segments() {
    for value in [".", ".."] {
        let err = expand_path("/v3/accounts/{accountID}/summary", &[("accountID", value)]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}

#[test]
fn test_render_template_with_lookup() {
    let rendered = render_template("{a}-{b}", |name| match name {
        "a" => Some("x".to_string()),
        _ => None,
    });
    assert_eq!(rendered, "x-");
}

#[test]
fn test_render_json_template_numbers_and_bools() {
    let value = json!({"tradeable": true, "pipLocation": -4});
    assert_eq!(
        render_json_template("{tradeable} {pipLocation}", &value),
        "true -4"
    );
}

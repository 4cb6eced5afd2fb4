//! Error types and their conversions

use snaplink::client::ClientError;
use snaplink::errors::SnaplinkError;
use snaplink::interfaces::cli::CliError;

#[test]
fn test_error_codes_are_stable() {
    let cases = [
        (SnaplinkError::config("x"), "E001", "Configuration Error"),
        (SnaplinkError::validation("x"), "E002", "Validation Error"),
        (SnaplinkError::backend("x"), "E003", "Backend Error"),
        (SnaplinkError::clipboard("x"), "E004", "Clipboard Error"),
        (SnaplinkError::terminal("x"), "E005", "Terminal Error"),
        (SnaplinkError::file_operation("x"), "E006", "File Operation Error"),
        (SnaplinkError::serialization("x"), "E007", "Serialization Error"),
    ];
    for (err, code, kind) in cases {
        assert_eq!(err.code(), code);
        assert_eq!(err.error_type(), kind);
        assert_eq!(err.message(), "x");
    }
}

#[test]
fn test_display_is_simple_format() {
    let err = SnaplinkError::config("missing base_url");
    assert_eq!(err.to_string(), "Configuration Error: missing base_url");
    assert!(err.format_colored().contains("E001"));
}

#[test]
fn test_io_and_json_conversions() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: SnaplinkError = io.into();
    assert!(matches!(err, SnaplinkError::FileOperation(_)));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SnaplinkError = json.into();
    assert!(matches!(err, SnaplinkError::Serialization(_)));
}

#[test]
fn test_client_error_reaches_cli() {
    let err: CliError = ClientError::Rejected {
        status: 404,
        detail: Some("Short URL not found".into()),
    }
    .into();
    assert_eq!(
        err.format_simple(),
        "Command error: HTTP 404: Short URL not found"
    );

    let err: CliError = SnaplinkError::from(ClientError::Decode("bad".into())).into();
    assert!(err.format_simple().starts_with("Command error: Backend Error"));
}

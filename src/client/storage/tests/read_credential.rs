use super::*;

/// Expect the local storage token to be used when present
#[test]
fn prefers_local_storage() {
    let test = TestBuilder::new()
        .with_credential("local-token")
        .with_credential_cookie("cookie-token")
        .build();

    assert_eq!(read_credential(&test.storage), Some("local-token".to_string()));
}

/// Expect the access token cookie to be used when local storage has no token
#[test]
fn falls_back_to_cookie() {
    let test = TestBuilder::new()
        .with_cookie("theme", "dark")
        .with_credential_cookie("cookie-token")
        .build();

    assert_eq!(read_credential(&test.storage), Some("cookie-token".to_string()));
}

/// Expect an empty local storage token to fall through to the cookie
#[test]
fn empty_local_token_falls_back_to_cookie() {
    let test = TestBuilder::new()
        .with_credential("")
        .with_credential_cookie("cookie-token")
        .build();

    assert_eq!(read_credential(&test.storage), Some("cookie-token".to_string()));
}

/// Expect None when neither source holds a credential
#[test]
fn none_without_credential() {
    let test = TestBuilder::new().with_credential("").build();

    assert_eq!(read_credential(&test.storage), None);
}

/// Expect None rather than an error when storage cannot be read
#[test]
fn none_when_storage_fails() {
    let test = TestBuilder::new()
        .with_failing_storage()
        .with_credential("local-token")
        .build();

    assert_eq!(read_credential(&test.storage), None);
}

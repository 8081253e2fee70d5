use v20_client::utils::id::{CLIENT_ID_LENGTH, client_specifier, generate_client_id};

#[test]
fn test_generate_client_id_shape() {
    let id = generate_client_id();
    assert_eq!(id.len(), CLIENT_ID_LENGTH);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_generate_client_id_unique() {
    let a = generate_client_id();
    let b = generate_client_id();
    assert_ne!(a, b);
}

#[test]
fn test_client_specifier() {
    assert_eq!(client_specifier("my-order"), "@my-order");
}

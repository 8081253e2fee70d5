/// Alphabet used for generated client identifiers
const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of generated client identifiers
pub const CLIENT_ID_LENGTH: usize = 24;

/// Generates a client-side identifier for orders and trades.
///
/// Client extension ids travel in `clientExtensions.id` and can later be used
/// as `@<id>` order or trade specifiers. They are composed of uppercase
/// letters and digits using `nanoid`.
///
/// # Examples
/// ```
/// use v20_client::utils::id::generate_client_id;
/// let id = generate_client_id();
/// assert_eq!(id.len(), 24);
/// ```
#[must_use]
pub fn generate_client_id() -> String {
    nanoid::nanoid!(CLIENT_ID_LENGTH, &ID_ALPHABET)
}

/// Builds the `@<clientID>` form accepted wherever an order or trade specifier is expected
#[must_use]
pub fn client_specifier(client_id: &str) -> String {
    format!("@{client_id}")
}

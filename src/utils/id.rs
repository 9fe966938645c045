use crate::constants::REQUEST_ID_LENGTH;

const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates an identifier used to correlate one gateway call across logs.
///
/// The identifier is 30 characters long, made of uppercase English letters
/// (`A-Z`) and digits (`0-9`), and generated with `nanoid`.
///
/// # Examples
/// ```
/// use tradeit_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LENGTH, &ID_ALPHABET)
}

/// Session providers consumed by the client
pub mod interface;
/// Session token type
pub mod token;

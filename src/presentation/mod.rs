/// Order enums and order status models
pub mod order;
/// Position models
pub mod position;
/// Helpers for broker-defined enumerated fields
pub mod serialization;

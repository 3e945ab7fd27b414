//! Helpers for token amounts expressed as `U256` base units: exact
//! arithmetic that must not overflow in intermediate steps and serde
//! adapters for the string encodings used on the wire.

pub mod serialization;
pub mod u256_ext;

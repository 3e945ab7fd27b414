//! Checks for order data that does not come from typed Rust values.
//!
//! Orders and amounts built in Rust are valid by construction. Input read
//! from JSON or user supplied strings should pass through these functions
//! before being handed to the selectors.

use {
    crate::{
        error::{SchemaError, ValidationError},
        order::Order,
    },
    alloy::primitives::U256,
    number::serialization::parse_whole_u256,
    serde::Deserialize,
    serde_json::Value,
};

/// Parses a JSON array of order records.
///
/// Every record needs a `makerAssetAmount`. Amounts must be strings holding
/// whole, non-negative numbers. Unknown fields are ignored.
pub fn orders_from_json(value: &Value) -> Result<Vec<Order>, SchemaError> {
    let Value::Array(orders) = value else {
        return Err(SchemaError::NotAnArray(json_type(value)));
    };
    orders
        .iter()
        .enumerate()
        .map(|(index, order)| {
            Order::deserialize(order)
                .map_err(|source| SchemaError::MalformedOrder { index, source })
        })
        .collect()
}

/// Parses a single amount argument called `name`.
///
/// Accepts the same strings as the amount fields of [`orders_from_json`]:
/// decimal numbers, optionally with a fractional part or exponent as long as
/// the value is whole (`"1.0"`, `"2e18"`), and 0x prefixed hex.
pub fn base_unit_amount(name: &'static str, value: &str) -> Result<U256, ValidationError> {
    parse_whole_u256(value).map_err(|reason| ValidationError::InvalidAmount {
        name,
        index: None,
        reason,
    })
}

/// Parses a list argument called `name`, reporting the index of the first
/// invalid entry.
pub fn base_unit_amounts<S: AsRef<str>>(
    name: &'static str,
    values: &[S],
) -> Result<Vec<U256>, ValidationError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse_whole_u256(value.as_ref()).map_err(|reason| ValidationError::InvalidAmount {
                name,
                index: Some(index),
                reason,
            })
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

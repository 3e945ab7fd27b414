use thiserror::Error;

pub use number::serialization::AmountError;

/// Any failure of the boundary checks or the selectors.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// An untyped order record does not have the shape of an [`crate::Order`].
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("expected an array of orders but got {0}")]
    NotAnArray(&'static str),
    #[error("order {index} is malformed: {source}")]
    MalformedOrder {
        index: usize,
        source: serde_json::Error,
    },
}

/// An argument violates the contract of the selectors.
///
/// Always returned before any selection work happens.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{name} has {actual} entries but there are {expected} orders")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{name}{} is not a valid base unit amount: {reason}", at(.index))]
    InvalidAmount {
        name: &'static str,
        index: Option<usize>,
        reason: AmountError,
    },
    #[error("order {index} has a zero maker asset amount")]
    ZeroMakerAssetAmount { index: usize },
    #[error("{name} does not fit into 256 bits")]
    Overflow { name: &'static str },
}

fn at(index: &Option<usize>) -> String {
    index.map(|index| format!("[{index}]")).unwrap_or_default()
}

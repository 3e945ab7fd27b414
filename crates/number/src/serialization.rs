use {
    alloy::primitives::U256,
    serde::{
        Deserializer,
        Serializer,
        de::{self, Visitor},
    },
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
    thiserror::Error,
};

/// Why a string is not a whole number of base units.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty")]
    Empty,
    #[error("negative")]
    Negative,
    #[error("not a whole number")]
    Fractional,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("too large")]
    TooLarge,
}

/// Parses a whole, non-negative amount that fits into a [`U256`].
///
/// Accepts 0x prefixed hex and decimal numbers. A decimal may carry a
/// fractional part or an exponent as long as the value stays whole, so
/// `"10.0"` and `"2e3"` are valid while `"1.5"` and `"15e-2"` are not. Signs,
/// digit separators and whitespace are rejected.
pub fn parse_whole_u256(value: &str) -> Result<U256, AmountError> {
    if value.is_empty() {
        return Err(AmountError::Empty);
    }
    if value.starts_with('-') {
        return Err(AmountError::Negative);
    }
    if let Some(hex) = value.strip_prefix("0x") {
        return parse_digits(hex, 16);
    }

    let (mantissa, exponent) = match value.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)?),
        None => (value, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::InvalidDigit);
    }
    if !is_decimal(integer) || !is_decimal(fraction) {
        return Err(AmountError::InvalidDigit);
    }

    // The value is `digits * 10^scale`.
    let digits = format!("{integer}{fraction}");
    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|len| exponent.checked_sub(len))
        .ok_or(AmountError::TooLarge)?;
    let digits = if scale < 0 {
        let cut = usize::try_from(scale.unsigned_abs()).map_err(|_| AmountError::Fractional)?;
        if cut > digits.len() {
            if digits.bytes().all(|digit| digit == b'0') {
                return Ok(U256::ZERO);
            }
            return Err(AmountError::Fractional);
        }
        let (kept, dropped) = digits.split_at(digits.len() - cut);
        if dropped.bytes().any(|digit| digit != b'0') {
            return Err(AmountError::Fractional);
        }
        kept
    } else {
        digits.as_str()
    };

    let value = if digits.is_empty() {
        U256::ZERO
    } else {
        parse_digits(digits, 10)?
    };
    if scale <= 0 || value.is_zero() {
        return Ok(value);
    }
    let factor = U256::from(10)
        .checked_pow(U256::from(scale.unsigned_abs()))
        .ok_or(AmountError::TooLarge)?;
    value.checked_mul(factor).ok_or(AmountError::TooLarge)
}

fn parse_exponent(exponent: &str) -> Result<i64, AmountError> {
    let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    if digits.is_empty() || !is_decimal(digits) {
        return Err(AmountError::InvalidDigit);
    }
    // Out of range exponents are reported as too large.
    exponent.parse().map_err(|_| AmountError::TooLarge)
}

fn parse_digits(digits: &str, radix: u32) -> Result<U256, AmountError> {
    if digits.is_empty() {
        return Err(AmountError::Empty);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AmountError::InvalidDigit);
    }
    U256::from_str_radix(digits, u64::from(radix)).map_err(|_| AmountError::TooLarge)
}

fn is_decimal(digits: &str) -> bool {
    digits.bytes().all(|digit| digit.is_ascii_digit())
}

/// Serialize [`U256`] as a decimal string and deserialize [`U256`] from a
/// decimal or a hex string prefixed with 0x.
///
/// Input follows the rules of [`parse_whole_u256`].
#[derive(Debug)]
pub struct HexOrDecimalU256;

impl<'de> DeserializeAs<'de, U256> for HexOrDecimalU256 {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct U256Visitor;

        impl Visitor<'_> for U256Visitor {
            type Value = U256;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a u256 encoded either as 0x hex prefixed or decimal encoded string"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_whole_u256(s)
                    .map_err(|err| E::custom(format!("failed to decode {s:?} as u256: {err}")))
            }
        }

        deserializer.deserialize_str(U256Visitor)
    }
}

impl SerializeAs<U256> for HexOrDecimalU256 {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.to_string())
    }
}

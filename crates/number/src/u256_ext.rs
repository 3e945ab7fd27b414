//! Extension trait for U256 arithmetic operations.

use {
    alloy::primitives::U256,
    anyhow::Result,
    num::BigUint,
};

/// Extension trait for U256 to add utility methods.
pub trait U256Ext: Sized {
    /// Computes `floor(self * mul / div)`.
    ///
    /// The product is computed exactly, so the result is only `None` when
    /// `div` is zero or when the quotient itself does not fit into 256 bits.
    fn checked_mul_div_floor(&self, mul: &Self, div: &Self) -> Option<Self>;

    /// Convert to BigUint.
    fn to_big_uint(&self) -> BigUint;

    /// Create from BigUint.
    fn from_big_uint(input: &BigUint) -> Result<Self>;
}

impl U256Ext for U256 {
    fn checked_mul_div_floor(&self, mul: &Self, div: &Self) -> Option<Self> {
        if div.is_zero() {
            return None;
        }
        match self.checked_mul(*mul) {
            Some(product) => Some(product / *div),
            // Intermediate overflow, fall back to arbitrary precision.
            None => {
                let quotient = self.to_big_uint() * mul.to_big_uint() / div.to_big_uint();
                Self::from_big_uint(&quotient).ok()
            }
        }
    }

    fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_be(self.to_be_bytes::<32>().as_slice())
    }

    fn from_big_uint(input: &BigUint) -> Result<Self> {
        let bytes = input.to_bytes_be();
        anyhow::ensure!(bytes.len() <= 32, "too large");
        Ok(U256::from_be_slice(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floor_truncates() {
        let value = U256::from(50).checked_mul_div_floor(&U256::from(7), &U256::from(100));
        assert_eq!(value, Some(U256::from(3)));

        let value = U256::from(99).checked_mul_div_floor(&U256::from(1), &U256::from(100));
        assert_eq!(value, Some(U256::ZERO));
    }

    #[test]
    fn mul_div_floor_survives_intermediate_overflow() {
        // `U256::MAX * 3` does not fit but the quotient does.
        let value = U256::MAX.checked_mul_div_floor(&U256::from(3), &U256::from(4));
        let expected = U256::MAX / U256::from(4) * U256::from(3)
            + (U256::MAX % U256::from(4)) * U256::from(3) / U256::from(4);
        assert_eq!(value, Some(expected));

        let value = U256::MAX.checked_mul_div_floor(&U256::MAX, &U256::MAX);
        assert_eq!(value, Some(U256::MAX));
    }

    #[test]
    fn mul_div_floor_errors() {
        assert!(
            U256::from(1)
                .checked_mul_div_floor(&U256::from(1), &U256::ZERO)
                .is_none()
        );
        assert!(
            U256::MAX
                .checked_mul_div_floor(&U256::from(2), &U256::from(1))
                .is_none()
        );
    }

    #[test]
    fn big_uint_conversions() {
        let value = U256::from(1_000_000_000_000_000_000_u128);
        assert_eq!(U256::from_big_uint(&value.to_big_uint()).unwrap(), value);
        assert_eq!(U256::from_big_uint(&U256::MAX.to_big_uint()).unwrap(), U256::MAX);

        let too_large = U256::MAX.to_big_uint() + BigUint::from(1u8);
        assert!(U256::from_big_uint(&too_large).is_err());
    }
}

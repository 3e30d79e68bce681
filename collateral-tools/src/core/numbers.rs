// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! 18-decimal fixed point values and other constructor argument helpers.

use alloy::primitives::{aliases::U192, B256};

/// `1.0` as an 18-decimal fixed point number.
pub const FIX_ONE: U192 = U192::from_limbs([1_000_000_000_000_000_000, 0, 0]);

/// `numerator / denominator` as an 18-decimal fixed point number, rounded down.
pub fn fp_ratio(numerator: u64, denominator: u64) -> U192 {
    FIX_ONE * U192::from(numerator) / U192::from(denominator)
}

/// A whole number as an 18-decimal fixed point number.
pub fn fp_whole(value: u64) -> U192 {
    FIX_ONE * U192::from(value)
}

/// The error of a price derived from two feeds with errors `a` and `b`: `(1 + a)(1 + b) - 1`.
pub fn combined_error(a: U192, b: U192) -> U192 {
    (FIX_ONE + a) * (FIX_ONE + b) / FIX_ONE - FIX_ONE
}

#[derive(Debug, thiserror::Error)]
#[error("{0:?} does not fit in bytes32 (max 31 bytes)")]
pub struct Bytes32StringError(pub String);

/// Encodes `text` as a null-terminated, right-padded `bytes32` string.
pub fn bytes32_string(text: &str) -> Result<B256, Bytes32StringError> {
    let bytes = text.as_bytes();
    if bytes.len() > 31 {
        return Err(Bytes32StringError(text.to_string()));
    }
    let mut word = B256::ZERO;
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_values() {
        assert_eq!(fp_ratio(3, 1000), U192::from(3_000_000_000_000_000u64));
        assert_eq!(fp_ratio(1, 1_000_000), U192::from(1_000_000_000_000u64));
        assert_eq!(fp_whole(1), FIX_ONE);
        assert_eq!(
            fp_whole(1_000_000),
            U192::from(1_000_000u64) * U192::from(10u64).pow(U192::from(18u64))
        );
    }

    #[test]
    fn combined_error_of_two_feeds() {
        // 1.005 * 1.0015 - 1 = 0.0065075
        let combined = combined_error(fp_ratio(5, 1000), fp_ratio(15, 10_000));
        assert_eq!(combined, fp_ratio(65_075, 10_000_000));
        assert_eq!(combined_error(U192::ZERO, U192::ZERO), U192::ZERO);
    }

    #[test]
    fn bytes32_strings() {
        let usd = bytes32_string("USD").unwrap();
        assert_eq!(&usd[..3], b"USD");
        assert!(usd[3..].iter().all(|b| *b == 0));

        assert!(bytes32_string(&"x".repeat(31)).is_ok());
        assert!(bytes32_string(&"x".repeat(32)).is_err());
    }
}

//! Positional numeral decoding.
//!
//! The numeral is read left to right with the usual Horner-style
//! accumulation:
//!
//! ```text
//! result = result · base + digit(ch)
//! ```
//!
//! Digits `0-9` map to values 0..=9 and letters `a-z` (either case) map to
//! 10..=35.

use num_bigint::BigUint;

use crate::error::DecodeError;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix.
pub const MAX_BASE: u32 = 36;

/// Default width bound for decoded values, in bits.
pub const DEFAULT_MAX_BITS: u64 = 512;

/// Decoder for base-encoded share values.
///
/// The decoder is a plain value type: it holds no state besides the width
/// bound and can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoder {
    max_bits: u64,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BITS)
    }
}

impl Decoder {
    /// Creates a decoder accepting values of at most `max_bits` bits.
    pub fn new(max_bits: u64) -> Self {
        Self { max_bits }
    }

    /// Returns the width bound, in bits.
    pub fn max_bits(&self) -> u64 {
        self.max_bits
    }

    /// Decodes `encoded` as an unsigned numeral in radix `base`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EmptyValue`] if `encoded` is empty, whatever the base
    /// - [`DecodeError::InvalidBase`] if `base` is outside `2..=36`
    /// - [`DecodeError::InvalidDigit`] for the first character that is not
    ///   a digit of `base`
    /// - [`DecodeError::Overflow`] once the value needs more than
    ///   `max_bits` bits
    pub fn decode(&self, encoded: &str, base: u32) -> Result<BigUint, DecodeError> {
        if encoded.is_empty() {
            return Err(DecodeError::EmptyValue);
        }

        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(DecodeError::InvalidBase(base));
        }

        let mut result = BigUint::ZERO;

        for (position, ch) in encoded.chars().enumerate() {
            let digit = ch
                .to_digit(MAX_BASE)
                .filter(|&d| d < base)
                .ok_or(DecodeError::InvalidDigit {
                    digit: ch,
                    position,
                    base,
                })?;

            result = result * base + digit;

            if result.bits() > self.max_bits {
                return Err(DecodeError::Overflow {
                    max_bits: self.max_bits,
                });
            }
        }

        Ok(result)
    }
}

/// Decodes `encoded` in radix `base` with the default width bound.
///
/// See [`Decoder::decode`] for the error conditions.
pub fn decode(encoded: &str, base: u32) -> Result<BigUint, DecodeError> {
    Decoder::default().decode(encoded, base)
}

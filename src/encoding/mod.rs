//! Share value decoding.
//!
//! Shares carry their y-coordinate as a numeral written in an arbitrary
//! radix between 2 and 36. This module turns such a numeral back into an
//! exact, arbitrary-precision unsigned integer.
//!
//! - [`Decoder`]
//!   Configurable decoder with an explicit width bound.
//! - [`decode`]
//!   Convenience wrapper using the default bound of
//!   [`DEFAULT_MAX_BITS`] bits.
//!
//! Decoding is strict: the empty string, signs, whitespace and any
//! character whose digit value is not below the base are rejected rather
//! than skipped. Values that would need more than the configured number
//! of bits fail with an overflow error instead of wrapping.

mod radix;

pub use radix::{DEFAULT_MAX_BITS, Decoder, MAX_BASE, MIN_BASE, decode};

//! Secret reconstruction core.
//!
//! This module provides the public API for recovering the constant term of
//! a polynomial with integer coefficients from a set of integer points.
//!
//! Given at least `k` points `(xᵢ, f(xᵢ))` of a polynomial of degree
//! `k − 1`, the secret `f(0)` is obtained by Lagrange interpolation at
//! zero:
//!
//! ```text
//! f(0) = Σᵢ yᵢ · Π_{j≠i} (0 − xⱼ) / (xᵢ − xⱼ)
//! ```
//!
//! ## Provided operations
//!
//! - [`reconstruct`]
//!   Recover the secret with the default quorum policy ([`FirstK`]).
//!
//! - [`Reconstructor`]
//!   The same operation with a caller-chosen [`SelectionPolicy`].
//!
//! ## Numeric properties
//!
//! - All arithmetic is exact, over arbitrary-precision rationals.
//! - A result that is not an integer is reported as an error, never
//!   rounded.
//!
//! ## Scope and limitations
//!
//! Shares are assumed to be honest. Only the selected quorum is used: no
//! other subset of the supplied points is checked for consistency, so a
//! corrupted share inside the quorum silently yields a wrong secret.

use num_bigint::BigInt;

use crate::{
    error::ReconstructionError,
    recovery::interpolation::{
        rational::Fraction,
        selection::{FirstK, SelectionPolicy},
    },
};

/// A point of the shared polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Share index (x-coordinate).
    pub x: BigInt,

    /// Decoded share value (y-coordinate).
    pub y: BigInt,
}

impl Point {
    /// Creates a point from any pair of integers.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Reconstructs secrets using a fixed quorum selection policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reconstructor<P = FirstK> {
    policy: P,
}

impl<P: SelectionPolicy> Reconstructor<P> {
    /// Creates a reconstructor selecting its quorum with `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Returns the quorum selection policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Recovers `f(0)` from `points` using a quorum of `k` of them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` is zero
    /// - the policy cannot find `k` usable points
    /// - two quorum points share an x-coordinate
    /// - the interpolated value is not an integer
    pub fn reconstruct(&self, points: &[Point], k: usize) -> Result<BigInt, ReconstructionError> {
        if k == 0 {
            return Err(ReconstructionError::InvalidThreshold);
        }

        let quorum = self.policy.select(points, k)?;

        tracing::debug!(
            "Interpolating at zero over x = [{}]",
            quorum
                .iter()
                .map(|p| p.x.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Fraction::lagrange_at_zero(&quorum)
    }
}

/// Recovers `f(0)` from the first `k` points of `points`.
///
/// # Errors
///
/// Returns an error if:
/// - `k` is zero
/// - fewer than `k` points are provided
/// - two of the first `k` points share an x-coordinate
/// - the interpolated value is not an integer
///
/// # Examples
///
/// ```
/// use secret_recovery::recovery::lagrange::{Point, reconstruct};
///
/// // f(x) = x² + 2x + 1
/// let points = [Point::new(1, 4), Point::new(2, 9), Point::new(3, 16)];
/// assert_eq!(reconstruct(&points, 3).unwrap(), 1.into());
/// ```
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt, ReconstructionError> {
    Reconstructor::<FirstK>::default().reconstruct(points, k)
}

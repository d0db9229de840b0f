//! Exact rational arithmetic for Lagrange interpolation.
//!
//! This module implements the small amount of arithmetic over ℚ that
//! interpolation at zero requires. Values are kept as a pair of
//! arbitrary-precision integers, so no precision is ever lost and the
//! integrality of the final result can be checked rather than assumed.
//!
//! This module is private to the interpolation layer. Selection of the
//! quorum and validation of the threshold happen above it.
//!
//! ## Representation
//!
//! - The denominator is always strictly positive.
//! - Numerator and denominator are coprime.
//! - Zero is represented as `0/1`.

use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{error::ReconstructionError, recovery::interpolation::core::Point};

/// A rational number in lowest terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds `numerator / denominator` and reduces it.
    ///
    /// Returns `None` if the denominator is zero.
    pub(crate) fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }

        let mut f = Fraction {
            numerator,
            denominator,
        };
        f.normalize();
        Some(f)
    }

    pub(crate) fn zero() -> Self {
        Fraction::from(BigInt::zero())
    }

    pub(crate) fn one() -> Self {
        Fraction::from(BigInt::one())
    }

    /// Returns the integer value if the denominator is one, or the
    /// reduced numerator/denominator pair otherwise.
    pub(crate) fn into_integer(self) -> Result<BigInt, (BigInt, BigInt)> {
        if self.denominator.is_one() {
            Ok(self.numerator)
        } else {
            Err((self.numerator, self.denominator))
        }
    }

    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -std::mem::take(&mut self.numerator);
            self.denominator = -std::mem::take(&mut self.denominator);
        }

        let g = self.numerator.gcd(&self.denominator);
        if !g.is_one() {
            self.numerator /= &g;
            self.denominator /= &g;
        }
    }

    /// Computes the value at zero of the polynomial interpolating `points`.
    ///
    /// For every point the Lagrange basis value at zero,
    /// `Lᵢ(0) = Π_{j≠i} (0 − xⱼ) / (xᵢ − xⱼ)`, is built as an exact
    /// fraction, scaled by `yᵢ` and added to the running sum. No rounding
    /// happens at any point.
    ///
    /// # Errors
    ///
    /// - [`ReconstructionError::DuplicateXCoordinate`] if two points share
    ///   the same `x`
    /// - [`ReconstructionError::NonIntegerResult`] if the sum is not an
    ///   integer
    pub(crate) fn lagrange_at_zero(points: &[&Point]) -> Result<BigInt, ReconstructionError> {
        let mut acc = Fraction::zero();

        for (i, pi) in points.iter().enumerate() {
            let mut basis = Fraction::one();

            for (j, pj) in points.iter().enumerate() {
                if i != j {
                    let factor = Fraction::new(-&pj.x, &pi.x - &pj.x)
                        .ok_or_else(|| ReconstructionError::DuplicateXCoordinate(pi.x.clone()))?;
                    basis = basis * factor;
                }
            }

            acc = acc + basis * Fraction::from(pi.y.clone());
        }

        acc.into_integer()
            .map_err(|(numerator, denominator)| ReconstructionError::NonIntegerResult {
                numerator,
                denominator,
            })
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Fraction {
            numerator: n,
            denominator: BigInt::one(),
        }
    }
}

/// Rational addition.
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut f = Fraction {
            numerator: self.numerator * &rhs.denominator + rhs.numerator * &self.denominator,
            denominator: self.denominator * rhs.denominator,
        };
        f.normalize();
        f
    }
}

/// Rational multiplication.
impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut f = Fraction {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        };
        f.normalize();
        f
    }
}

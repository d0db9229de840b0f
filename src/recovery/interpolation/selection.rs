//! Quorum selection policies.
//!
//! A policy picks which `k` points out of the supplied ones take part in
//! the interpolation. Every policy must return exactly `k` points with
//! pairwise distinct x-coordinates, or an error.

use std::collections::HashSet;

use num_bigint::BigInt;

use crate::{error::ReconstructionError, recovery::interpolation::core::Point};

/// Chooses the quorum used for one reconstruction.
pub trait SelectionPolicy {
    /// Selects `k` points with distinct x-coordinates from `points`.
    ///
    /// `k` is guaranteed to be non-zero by the caller.
    fn select<'a>(&self, points: &'a [Point], k: usize)
    -> Result<Vec<&'a Point>, ReconstructionError>;
}

/// Uses exactly the first `k` points, in input order.
///
/// Any duplicate x-coordinate among them is an error; later points are
/// never consulted as replacements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstK;

impl SelectionPolicy for FirstK {
    fn select<'a>(
        &self,
        points: &'a [Point],
        k: usize,
    ) -> Result<Vec<&'a Point>, ReconstructionError> {
        if points.len() < k {
            return Err(ReconstructionError::InsufficientPoints {
                required: k,
                available: points.len(),
            });
        }

        let mut seen: HashSet<&BigInt> = HashSet::with_capacity(k);
        let mut quorum = Vec::with_capacity(k);

        for p in points.iter().take(k) {
            if !seen.insert(&p.x) {
                return Err(ReconstructionError::DuplicateXCoordinate(p.x.clone()));
            }
            quorum.push(p);
        }

        Ok(quorum)
    }
}

/// Uses the first `k` points whose x-coordinate has not been seen yet.
///
/// Points repeating an earlier x-coordinate are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstDistinct;

impl SelectionPolicy for FirstDistinct {
    fn select<'a>(
        &self,
        points: &'a [Point],
        k: usize,
    ) -> Result<Vec<&'a Point>, ReconstructionError> {
        let mut seen: HashSet<&BigInt> = HashSet::with_capacity(k);
        let mut quorum = Vec::with_capacity(k);

        for p in points {
            if quorum.len() == k {
                break;
            }

            if seen.insert(&p.x) {
                quorum.push(p);
            } else {
                tracing::debug!("Skipping point with repeated x-coordinate {}", p.x);
            }
        }

        if quorum.len() < k {
            return Err(ReconstructionError::InsufficientPoints {
                required: k,
                available: quorum.len(),
            });
        }

        Ok(quorum)
    }
}

/// Runtime choice between the built-in policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuorumPolicy {
    /// See [`FirstK`].
    #[default]
    FirstK,
    /// See [`FirstDistinct`].
    FirstDistinct,
}

impl SelectionPolicy for QuorumPolicy {
    fn select<'a>(
        &self,
        points: &'a [Point],
        k: usize,
    ) -> Result<Vec<&'a Point>, ReconstructionError> {
        match self {
            QuorumPolicy::FirstK => FirstK.select(points, k),
            QuorumPolicy::FirstDistinct => FirstDistinct.select(points, k),
        }
    }
}

//! Problem solving pipeline.
//!
//! ```text
//! ShareRecord ──parse──▶ Share ──decode──▶ Point ──reconstruct──▶ secret
//! ```
//!
//! Every problem is independent: a failure is reported for that problem
//! only and never prevents the others in a batch from being solved.

use num_bigint::BigInt;
use rayon::prelude::*;

use crate::{
    encoding::{DEFAULT_MAX_BITS, Decoder},
    error::SolveError,
    problem::document::{Problem, ShareRecord},
    recovery::{
        lagrange::{Point, Reconstructor},
        selection::QuorumPolicy,
    },
};

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Width bound for decoded share values, in bits.
    pub max_bits: u64,
    /// How the quorum is chosen among the decoded points.
    pub quorum: QuorumPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
            quorum: QuorumPolicy::default(),
        }
    }
}

/// A share with its index and base parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// Share index (x-coordinate). Always positive.
    pub index: u64,
    /// Radix of `value`.
    pub base: u32,
    /// Encoded share value.
    pub value: String,
}

impl ShareRecord {
    /// Parses the textual index and base of this record.
    ///
    /// The base is only checked to be an integer here; its range is
    /// validated by the decoder.
    pub fn parse(&self) -> Result<Share, SolveError> {
        let index = self
            .index
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|&i| i > 0)
            .ok_or_else(|| SolveError::InvalidIndex {
                index: self.index.clone(),
            })?;

        let base = self
            .base
            .trim()
            .parse::<u32>()
            .map_err(|_| SolveError::MalformedBase {
                index: self.index.clone(),
                base: self.base.clone(),
            })?;

        Ok(Share {
            index,
            base,
            value: self.value.clone(),
        })
    }
}

/// A problem whose shares have all been decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconstructionRequest {
    /// Total number of shares.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
    /// Decoded points, in document order.
    pub points: Vec<Point>,
}

/// Decodes and reconstructs problems.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    decoder: Decoder,
    reconstructor: Reconstructor<QuorumPolicy>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            decoder: Decoder::new(config.max_bits),
            reconstructor: Reconstructor::with_policy(config.quorum),
        }
    }

    /// Decodes every share of `problem` into a point.
    ///
    /// # Errors
    ///
    /// Returns the first share that fails to parse or decode, or
    /// [`SolveError::InconsistentCounts`] when `n < k`.
    pub fn decode(&self, problem: &Problem) -> Result<ReconstructionRequest, SolveError> {
        if problem.n < problem.k {
            return Err(SolveError::InconsistentCounts {
                n: problem.n,
                k: problem.k,
            });
        }

        if problem.shares.len() != problem.n {
            tracing::warn!(
                "Problem declares n = {} but provides {} shares",
                problem.n,
                problem.shares.len()
            );
        }

        let points = problem
            .shares
            .iter()
            .map(|record| -> Result<Point, SolveError> {
                let share = record.parse()?;
                let y = self
                    .decoder
                    .decode(&share.value, share.base)
                    .map_err(|source| SolveError::Decode {
                        index: record.index.clone(),
                        source,
                    })?;

                tracing::trace!("Decoded share {} (base {}) to {y}", share.index, share.base);
                Ok(Point::new(share.index, y))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReconstructionRequest {
            n: problem.n,
            k: problem.k,
            points,
        })
    }

    /// Recovers the secret of an already decoded request.
    pub fn reconstruct(&self, request: &ReconstructionRequest) -> Result<BigInt, SolveError> {
        Ok(self.reconstructor.reconstruct(&request.points, request.k)?)
    }

    /// Decodes `problem` and recovers its secret.
    pub fn solve(&self, problem: &Problem) -> Result<BigInt, SolveError> {
        let request = self.decode(problem)?;
        tracing::debug!(
            "Decoded {} shares, reconstructing with k = {}",
            request.points.len(),
            request.k
        );
        self.reconstruct(&request)
    }

    /// Solves every problem independently, in parallel.
    ///
    /// The results are returned in the same order as `problems`.
    pub fn solve_all(&self, problems: &[Problem]) -> Vec<Result<BigInt, SolveError>> {
        problems.par_iter().map(|p| self.solve(p)).collect()
    }
}

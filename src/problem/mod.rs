//! Reconstruction problems.
//!
//! This module connects stored problem documents to the recovery core:
//!
//! - [`document`]
//!   JSON representation of problems and the [`Import`] trait used to read
//!   them from disk.
//! - [`solve`]
//!   The [`Solver`], which parses and decodes every share of a problem and
//!   hands the resulting points to the reconstructor.
//!
//! Formatting results for humans is left to the caller.

pub mod document;
pub mod solve;

pub use document::{Import, Problem, ProblemSet, ShareRecord};
pub use solve::{ReconstructionRequest, Share, Solver, SolverConfig};

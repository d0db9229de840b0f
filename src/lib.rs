//! Threshold secret recovery
//!
//! This crate reconstructs a secret integer from a threshold set of shares,
//! each share given as an index and a value written in an arbitrary radix.
//! It implements the reconstruction step of a Shamir-style scheme over the
//! integers: share values are decoded exactly, a quorum of `k` points is
//! selected, and the unique polynomial of degree `k − 1` through them is
//! evaluated at zero.
//!
//! The focus is on **exactness**: values are arbitrary-precision integers,
//! interpolation is carried out over the rationals, and every numeric or
//! structural problem surfaces as a typed error rather than a silently
//! rounded or wrapped result.
//!
//! # Module overview
//!
//! - `encoding`
//!   Decoding of share values from radix 2..=36 numerals, with an explicit
//!   width bound.
//!
//! - `recovery`
//!   Lagrange interpolation at zero and the quorum selection policies
//!   deciding which points take part in it.
//!
//!   The recovery module is purely numeric: it performs no I/O and keeps
//!   no state between calls, so independent reconstructions may run on
//!   any number of threads.
//!
//! - `problem`
//!   Problem documents (JSON) and the solver pipeline turning the shares
//!   of a document into a secret.
//!
//! - `error`
//!   Error types for each of the layers above.
//!
//! # Non-goals
//!
//! - No share generation and no finite-field arithmetic
//! - No protection against malicious or corrupted shares
//!
//! # Example
//!
//! ```
//! use secret_recovery::problem::{Problem, ShareRecord, Solver};
//!
//! // f(x) = 3 + x²
//! let problem = Problem::new(
//!     3,
//!     3,
//!     vec![
//!         ShareRecord::new("1", "10", "4"),
//!         ShareRecord::new("2", "2", "111"),
//!         ShareRecord::new("3", "16", "c"),
//!     ],
//! );
//!
//! let secret = Solver::default().solve(&problem).unwrap();
//! assert_eq!(secret, 3.into());
//! ```

pub mod encoding;
pub mod error;
pub mod problem;
pub mod recovery;

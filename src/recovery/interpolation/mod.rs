//! Lagrange interpolation over the integers.
//!
//! The implementation is split into three layers:
//!
//! - [`core`]
//!   Public API: the [`Point`](core::Point) type, threshold validation and
//!   secret reconstruction.
//!
//! - [`selection`]
//!   Quorum selection policies deciding which `k` of the supplied points
//!   are interpolated.
//!
//! - `rational`
//!   Exact arithmetic over ℚ backed by arbitrary-precision integers,
//!   including the interpolation-at-zero routine itself.
//!
//!   The rational module is kept private so that every interpolation goes
//!   through threshold validation and quorum selection first.
//!
//! ## Design notes
//!
//! - Interpolation never uses floating point. The result is checked to be
//!   an integer instead of being rounded.
//! - Quorum selection is a separate, swappable policy. The interpolation
//!   core only ever sees the `k` points it was handed.

pub mod core;
pub(crate) mod rational;
pub mod selection;

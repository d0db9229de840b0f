//! Secret recovery from threshold shares.
//!
//! This module reconstructs the constant term of a polynomial (the
//! *secret*) from `k` of its points, as in the reconstruction step of
//! Shamir Secret Sharing over the integers.
//!
//! ## Provided functionality
//!
//! - **Reconstruction**
//!   - The secret is recovered by Lagrange interpolation at zero, using
//!     exact rational arithmetic.
//!   - A non-integer result is reported as an error rather than rounded.
//!
//! - **Quorum selection**
//!   - By default the first `k` points, in the order supplied, form the
//!     quorum.
//!   - An alternative policy skips points whose x-coordinate repeats an
//!     earlier one.
//!
//! This module does not generate shares and does not work over a finite
//! field. It also does not detect malicious or corrupted shares: no
//! second quorum is ever interpolated to cross-check the first.

mod interpolation;

pub use interpolation::core as lagrange;
pub use interpolation::selection;

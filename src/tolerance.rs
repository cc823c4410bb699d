// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamping thresholds used when classifying a cubic.

use crate::common::{DISCRIMINANT_EPSILON, Q_EPSILON};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Thresholds below which intermediate values are treated as exactly zero.
///
/// The solver computes the discriminant `t` and the depressed constant `q`
/// in floating point, so inputs that mathematically sit on a regime boundary
/// (a repeated root, or a depressed cubic with no constant term) usually
/// miss it by a few ulps. Values whose magnitude is below the matching
/// threshold are snapped to zero before the regime is chosen.
///
/// The [default](Tolerance::DEFAULT) uses `1e-8` for both.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Threshold for the discriminant `t = q²/4 + p³/27`.
    pub discriminant: f64,
    /// Threshold for the depressed constant term `q`.
    pub q: f64,
}

impl Tolerance {
    /// [`DISCRIMINANT_EPSILON`] and [`Q_EPSILON`].
    pub const DEFAULT: Tolerance = Tolerance::new(DISCRIMINANT_EPSILON, Q_EPSILON);

    /// No clamping: only values that compute to exactly zero count as zero.
    pub const EXACT: Tolerance = Tolerance::uniform(0.0);

    /// Create a new `Tolerance`.
    ///
    /// Thresholds are compared with `|value| < epsilon`, so a negative or
    /// NaN threshold never clamps anything and behaves like [`EXACT`](Tolerance::EXACT).
    #[inline]
    pub const fn new(discriminant: f64, q: f64) -> Tolerance {
        Tolerance { discriminant, q }
    }

    /// Use the same threshold for the discriminant and for `q`.
    #[inline]
    pub const fn uniform(epsilon: f64) -> Tolerance {
        Tolerance::new(epsilon, epsilon)
    }

    /// Snap `t` to zero if it is within the discriminant threshold.
    #[inline]
    pub(crate) fn clamp_discriminant(&self, t: f64) -> f64 {
        clamp(t, self.discriminant)
    }

    /// Snap `q` to zero if it is within the `q` threshold.
    #[inline]
    pub(crate) fn clamp_q(&self, q: f64) -> f64 {
        clamp(q, self.q)
    }
}

impl Default for Tolerance {
    fn default() -> Tolerance {
        Tolerance::DEFAULT
    }
}

fn clamp(value: f64, epsilon: f64) -> f64 {
    if value.abs() < epsilon {
        if value != 0.0 {
            log::trace!("clamping {value:e} to zero (epsilon {epsilon:e})");
        }
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_e_minus_eight() {
        assert_eq!(Tolerance::default(), Tolerance::new(1e-8, 1e-8));
        assert_eq!(Tolerance::DEFAULT.discriminant, DISCRIMINANT_EPSILON);
        assert_eq!(Tolerance::DEFAULT.q, Q_EPSILON);
    }

    #[test]
    fn clamps_only_below_threshold() {
        let tol = Tolerance::DEFAULT;
        assert_eq!(tol.clamp_discriminant(5e-9), 0.0);
        assert_eq!(tol.clamp_discriminant(-5e-9), 0.0);
        assert_eq!(tol.clamp_discriminant(2e-8), 2e-8);
        assert_eq!(tol.clamp_discriminant(1e-8), 1e-8);
        assert_eq!(tol.clamp_q(-3e-9), 0.0);
        assert_eq!(tol.clamp_q(-3.0), -3.0);
    }

    #[test]
    fn clamped_zero_is_positive() {
        let z = Tolerance::DEFAULT.clamp_q(-1e-12);
        assert!(z.is_sign_positive());
        let z = Tolerance::DEFAULT.clamp_q(-0.0);
        assert!(z.is_sign_positive());
    }

    #[test]
    fn negative_or_nan_threshold_is_exact() {
        for tol in [Tolerance::uniform(-1.0), Tolerance::uniform(f64::NAN)] {
            assert_eq!(tol.clamp_discriminant(1e-300), 1e-300);
            assert_eq!(tol.clamp_q(-0.5), -0.5);
        }
    }

    #[test]
    fn exact_never_clamps() {
        assert_eq!(Tolerance::EXACT.clamp_discriminant(1e-300), 1e-300);
        assert_eq!(Tolerance::EXACT.clamp_q(-1e-300), -1e-300);
    }
}

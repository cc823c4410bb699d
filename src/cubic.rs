// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic equations and Cardano's method.

use core::f64::consts::PI;
use core::fmt;

use crate::common::cube_root;
use crate::{Complex, CubicRoots, Regime, Tolerance};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The cubic equation a·x³ + b·x² + c·x + d = 0.
///
/// # Examples
///
/// ```
/// use cardano::{Cubic, Regime};
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = Cubic::new(1.0, -6.0, 11.0, -6.0).solve().unwrap();
/// assert_eq!(roots.regime(), Regime::ThreeReal);
/// for (root, expected) in roots.iter().zip([3.0, 2.0, 1.0]) {
///     assert!((root.re - expected).abs() < 1e-9);
///     assert_eq!(root.im, 0.0);
/// }
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic {
    /// The coefficient of x³.
    pub a: f64,
    /// The coefficient of x².
    pub b: f64,
    /// The coefficient of x.
    pub c: f64,
    /// The constant term.
    pub d: f64,
}

/// The depressed form y³ + p·y + q = 0 of a cubic, where x = y - `shift`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depressed {
    /// `b / 3a`; a root `y` of the depressed cubic gives the root
    /// `y - shift` of the original.
    pub shift: f64,
    /// The coefficient of y.
    pub p: f64,
    /// The constant term.
    pub q: f64,
}

/// Reasons a cubic cannot be solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolveError {
    /// The coefficient of x³ is zero, so the equation is not a cubic.
    InvalidDegree,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidDegree => {
                write!(f, "Leading coefficient is zero; not a cubic equation")
            }
        }
    }
}

impl core::error::Error for SolveError {}

impl Cubic {
    /// Create a new cubic from its coefficients, highest degree first.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Cubic {
        Cubic { a, b, c, d }
    }

    /// Is the leading coefficient nonzero?
    #[inline]
    pub fn is_cubic(&self) -> bool {
        self.a != 0.0
    }

    /// Evaluate the polynomial at a real point.
    #[inline]
    pub fn eval_real(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluate the polynomial at a complex point.
    pub fn eval(&self, z: Complex) -> Complex {
        ((z * self.a + self.b) * z + self.c) * z + self.d
    }

    /// Normalize and remove the quadratic term.
    ///
    /// With j = b/a, k = c/a, l = d/a this gives p = k - j²/3 and
    /// q = 2j³/27 - jk/3 + l. No clamping is applied.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDegree`] if `a` is zero.
    pub fn depress(&self) -> Result<Depressed, SolveError> {
        if !self.is_cubic() {
            log::debug!("rejecting {self:?}: leading coefficient is zero");
            return Err(SolveError::InvalidDegree);
        }
        let j = self.b / self.a;
        let k = self.c / self.a;
        let l = self.d / self.a;
        let p = -(j * j / 3.0) + k;
        let q = (2.0 / 27.0 * j * j * j) - (j * k / 3.0) + l;
        Ok(Depressed {
            shift: j / 3.0,
            p,
            q,
        })
    }

    /// The regime this cubic falls into with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDegree`] if `a` is zero.
    pub fn regime(&self) -> Result<Regime, SolveError> {
        self.regime_with(Tolerance::DEFAULT)
    }

    /// The regime this cubic falls into with the given tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDegree`] if `a` is zero.
    pub fn regime_with(&self, tolerance: Tolerance) -> Result<Regime, SolveError> {
        let depressed = self.depress()?;
        let t = tolerance.clamp_discriminant(depressed.discriminant());
        Ok(Regime::from_discriminant(t))
    }

    /// Find all three roots, using the default [`Tolerance`].
    ///
    /// See [`solve_with`](Cubic::solve_with).
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDegree`] if `a` is zero.
    pub fn solve(&self) -> Result<CubicRoots, SolveError> {
        self.solve_with(Tolerance::DEFAULT)
    }

    /// Find all three roots using Cardano's method.
    ///
    /// The cubic is normalized and depressed to y³ + p·y + q = 0, then the
    /// discriminant t = q²/4 + p³/27 picks one of three closed forms (see
    /// [`Regime`]). Before branching, `t` and `q` are snapped to zero if
    /// they fall inside `tolerance`, so that repeated roots are recognized
    /// as such instead of producing tiny spurious imaginary parts.
    ///
    /// The order of the returned roots is documented on [`CubicRoots`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidDegree`] if `a` is zero.
    pub fn solve_with(&self, tolerance: Tolerance) -> Result<CubicRoots, SolveError> {
        let depressed = self.depress()?;
        let t = tolerance.clamp_discriminant(depressed.discriminant());
        let Depressed { shift, p, q } = depressed;
        let q = tolerance.clamp_q(q);
        let regime = Regime::from_discriminant(t);
        log::trace!("depressed {self:?}: p={p:e} q={q:e} t={t:e}, {regime:?}");

        let ys = match regime {
            Regime::OneReal => one_real(p, q, t),
            Regime::RepeatedReal => repeated_real(q),
            Regime::ThreeReal => three_real(p, q, t),
        };
        let roots = ys.map(|y| y - shift);
        Ok(CubicRoots::new(roots, regime))
    }
}

impl Depressed {
    /// The discriminant t = q²/4 + p³/27, unclamped.
    ///
    /// Positive means one real root and a conjugate pair, zero means a
    /// repeated real root, negative means three distinct real roots.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.q * self.q / 4.0 + self.p * self.p * self.p / 27.0
    }
}

// t > 0
fn one_real(p: f64, q: f64, t: f64) -> [Complex; 3] {
    let sqrt_t = t.sqrt();
    let r1 = cube_root(-q / 2.0 + sqrt_t) + cube_root(-q / 2.0 - sqrt_t);
    let re = -r1 / 2.0;
    // The pair solves y² + r1·y + r1² + p = 0, using q/r1 = -(r1² + p).
    // Dividing by r1 directly loses everything when |q| is small against p.
    let im = if q == 0.0 {
        p.sqrt()
    } else {
        (0.75 * r1 * r1 + p).abs().sqrt()
    };
    [Complex::real(r1), Complex::new(re, im), Complex::new(re, -im)]
}

// t = 0
fn repeated_real(q: f64) -> [Complex; 3] {
    if q == 0.0 {
        // Triple root at the origin of the depressed cubic.
        return [Complex::ZERO; 3];
    }
    let r1 = 2.0 * cube_root(-q / 2.0);
    let half = r1 / 2.0;
    // Mathematically zero when t = 0; rounding can push it slightly negative.
    let offset = (half * half + q / r1).max(0.0).sqrt();
    [
        Complex::real(r1),
        Complex::real(-half + offset),
        Complex::real(-half - offset),
    ]
}

// t < 0
fn three_real(p: f64, q: f64, t: f64) -> [Complex; 3] {
    let x = -q / 2.0;
    let y = (-t).sqrt();
    let mut angle = (y / x).atan();
    if q > 0.0 {
        angle = PI - angle;
    }
    let m = 2.0 * (-p / 3.0).sqrt();
    [
        Complex::real(m * (angle / 3.0).cos()),
        Complex::real(m * ((angle + 2.0 * PI) / 3.0).cos()),
        Complex::real(m * ((angle + 4.0 * PI) / 3.0).cos()),
    ]
}

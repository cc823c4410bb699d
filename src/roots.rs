// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The roots of a cubic, and the shape they come in.

use core::ops::Index;
use core::slice;

use arrayvec::ArrayVec;

use crate::Complex;

/// Which of the three cases of Cardano's method a cubic falls into.
///
/// This is decided by the sign of the discriminant `t = q²/4 + p³/27` of the
/// depressed cubic, after small values have been clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "the set of cases is mathematically closed")]
pub enum Regime {
    /// `t > 0`: one real root and a pair of complex conjugates.
    OneReal,
    /// `t = 0`: three real roots, at least two of them equal.
    RepeatedReal,
    /// `t < 0`: three distinct real roots.
    ThreeReal,
}

impl Regime {
    /// Classify a (clamped) discriminant.
    ///
    /// A NaN discriminant, which only comes from non-finite coefficients,
    /// is classified as [`ThreeReal`](Regime::ThreeReal); the roots computed
    /// from it will be NaN.
    pub fn from_discriminant(t: f64) -> Regime {
        if t > 0.0 {
            Regime::OneReal
        } else if t == 0.0 {
            Regime::RepeatedReal
        } else {
            Regime::ThreeReal
        }
    }

    /// Does this regime produce a complex conjugate pair?
    #[inline]
    pub fn has_complex_roots(self) -> bool {
        matches!(self, Regime::OneReal)
    }
}

/// A root, or a conjugate pair of roots, in tagged form.
///
/// This is an alternative view of [`CubicRoots`] for callers that would
/// rather match on the kind of root than test imaginary parts for zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "the set of cases is mathematically closed")]
pub enum Root {
    /// A single real root.
    Real(f64),
    /// The two roots `re + im·i` and `re - im·i`.
    ComplexPair {
        /// Shared real part.
        re: f64,
        /// Imaginary part of the first root of the pair.
        im: f64,
    },
}

impl Root {
    /// How many roots this entry stands for.
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Root::Real(_) => 1,
            Root::ComplexPair { .. } => 2,
        }
    }

    /// Expand into flat complex form.
    ///
    /// A pair expands to `re + im·i` followed by `re - im·i`.
    pub fn to_complex(self) -> ArrayVec<Complex, 2> {
        let mut result = ArrayVec::new();
        match self {
            Root::Real(re) => result.push(Complex::real(re)),
            Root::ComplexPair { re, im } => {
                result.push(Complex::new(re, im));
                result.push(Complex::new(re, -im));
            }
        }
        result
    }
}

/// The three roots of a cubic.
///
/// Roots are kept in the order Cardano's method derives them, which is *not*
/// sorted by value or magnitude:
///
/// - [`Regime::OneReal`]: the real root, then `re + im·i`, then `re - im·i`.
/// - [`Regime::RepeatedReal`]: the root `2·∛(-q/2)` of the depressed cubic
///   first, then the (coincident) other two.
/// - [`Regime::ThreeReal`]: the three angles `θ/3`, `(θ + 2π)/3`,
///   `(θ + 4π)/3` of the trigonometric form, in that order.
///
/// Real roots have an imaginary part of exactly zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicRoots {
    roots: [Complex; 3],
    regime: Regime,
}

impl CubicRoots {
    pub(crate) fn new(roots: [Complex; 3], regime: Regime) -> CubicRoots {
        CubicRoots { roots, regime }
    }

    /// Rebuild from tagged form.
    ///
    /// Returns `None` unless the entries expand to exactly three roots.
    pub fn from_tagged(regime: Regime, tagged: &[Root]) -> Option<CubicRoots> {
        let mut roots = ArrayVec::<Complex, 3>::new();
        for root in tagged {
            for z in root.to_complex() {
                roots.try_push(z).ok()?;
            }
        }
        let roots = roots.into_inner().ok()?;
        Some(CubicRoots::new(roots, regime))
    }

    /// The case of Cardano's method these roots came from.
    #[inline]
    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// The roots, in derivation order.
    #[inline]
    pub fn as_array(&self) -> &[Complex; 3] {
        &self.roots
    }

    /// The roots, in derivation order.
    #[inline]
    pub fn into_array(self) -> [Complex; 3] {
        self.roots
    }

    /// Iterate over the roots, in derivation order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Complex> {
        self.roots.iter()
    }

    /// Real parts of the roots whose imaginary part is exactly zero.
    pub fn real_roots(&self) -> ArrayVec<f64, 3> {
        self.roots
            .iter()
            .filter(|z| z.is_real())
            .map(|z| z.re)
            .collect()
    }

    /// The root with the largest [magnitude](Complex::magnitude).
    ///
    /// Ties go to the earliest root in derivation order. NaN magnitudes never
    /// win over a number.
    pub fn largest_by_magnitude(&self) -> Complex {
        let mut best = self.roots[0];
        let mut best_mag = best.magnitude();
        for &z in &self.roots[1..] {
            let mag = z.magnitude();
            if mag > best_mag || (best_mag.is_nan() && !mag.is_nan()) {
                best = z;
                best_mag = mag;
            }
        }
        best
    }

    /// The tagged view of these roots.
    ///
    /// For [`Regime::OneReal`] this is a [`Root::Real`] followed by a single
    /// [`Root::ComplexPair`]; otherwise it is three [`Root::Real`]s.
    pub fn tagged(&self) -> ArrayVec<Root, 3> {
        let mut result = ArrayVec::new();
        let [r0, r1, r2] = self.roots;
        match self.regime {
            Regime::OneReal => {
                result.push(Root::Real(r0.re));
                result.push(Root::ComplexPair {
                    re: r1.re,
                    im: r1.im,
                });
            }
            Regime::RepeatedReal | Regime::ThreeReal => {
                result.push(Root::Real(r0.re));
                result.push(Root::Real(r1.re));
                result.push(Root::Real(r2.re));
            }
        }
        result
    }
}

impl Index<usize> for CubicRoots {
    type Output = Complex;

    #[inline]
    fn index(&self, index: usize) -> &Complex {
        &self.roots[index]
    }
}

impl IntoIterator for CubicRoots {
    type Item = Complex;
    type IntoIter = core::array::IntoIter<Complex, 3>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a> IntoIterator for &'a CubicRoots {
    type Item = &'a Complex;
    type IntoIter = slice::Iter<'a, Complex>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl From<CubicRoots> for [Complex; 3] {
    #[inline]
    fn from(roots: CubicRoots) -> [Complex; 3] {
        roots.roots
    }
}

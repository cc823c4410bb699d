// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complex number.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A complex number, `re + im·i`.
///
/// Roots of a cubic are always reported as `Complex`; a real root simply has
/// an imaginary part of exactly zero.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// The complex number 0.
    pub const ZERO: Complex = Complex::new(0., 0.);

    /// Create a new `Complex` from its real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Create a `Complex` with a zero imaginary part.
    #[inline]
    pub const fn real(re: f64) -> Complex {
        Complex { re, im: 0. }
    }

    /// The complex conjugate, `re - im·i`.
    #[inline]
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// The magnitude (absolute value) `√(re² + im²)`.
    ///
    /// ```
    /// use cardano::Complex;
    ///
    /// assert_eq!(Complex::new(3.0, -4.0).magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The squared magnitude.
    ///
    /// Cheaper than [`magnitude`](Complex::magnitude) when only comparing.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Is the imaginary part exactly zero?
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == 0.0
    }

    /// Are both parts [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Is either part [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Complex {
        Complex::real(re)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from(v: (f64, f64)) -> Complex {
        Complex::new(v.0, v.1)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(z: Complex) -> (f64, f64) {
        (z.re, z.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: f64) -> Complex {
        Complex::new(self.re + other, self.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: f64) -> Complex {
        Complex::new(self.re - other, self.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: f64) -> Complex {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        other * self
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.re, formatter)?;
        if self.im.is_sign_negative() {
            write!(formatter, "-")?;
        } else {
            write!(formatter, "+")?;
        }
        fmt::Display::fmt(&self.im.abs(), formatter)?;
        write!(formatter, "i")
    }
}

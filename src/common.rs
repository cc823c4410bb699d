// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

use crate::{Complex, Cubic};

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("cardano requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan(self) -> Self => atan;
    fn cbrt(self) -> Self => cbrt;
    fn cos(self) -> Self => cos;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sqrt(self) -> Self => sqrt;
}

/// Magnitude below which the discriminant `t = q²/4 + p³/27` is forced to zero.
///
/// Without this clamp, a cubic with a repeated root usually lands a few ulps
/// to one side of zero and gets classified as having either a complex pair or
/// three distinct roots.
pub const DISCRIMINANT_EPSILON: f64 = 1e-8;

/// Magnitude below which the depressed constant term `q` is forced to zero.
pub const Q_EPSILON: f64 = 1e-8;

/// Real cube root, keeping the sign of the input.
///
/// Unlike `x.powf(1.0 / 3.0)`, this is defined for negative `x`:
///
/// ```
/// use cardano::common::cube_root;
///
/// assert!((cube_root(-8.0) + 2.0).abs() < 1e-12);
/// assert!((cube_root(27.0) - 3.0).abs() < 1e-12);
/// assert_eq!(cube_root(0.0), 0.0);
/// ```
///
/// NaN maps to NaN and infinities keep their sign.
#[inline]
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// Find all three roots of a·x³ + b·x² + c·x + d = 0.
///
/// This is the lenient form of [`Cubic::solve`]: when `a` is zero the
/// equation is not a cubic and an empty result is returned instead of an
/// error. Otherwise the result always has exactly three entries, in the
/// order described on [`CubicRoots`](crate::CubicRoots).
///
/// ```
/// use cardano::common::solve_cubic;
///
/// let roots = solve_cubic(1.0, -6.0, 11.0, -6.0);
/// assert_eq!(roots.len(), 3);
/// assert!(roots.iter().all(|r| r.is_real()));
///
/// assert!(solve_cubic(0.0, 1.0, 1.0, 1.0).is_empty());
/// ```
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> ArrayVec<Complex, 3> {
    let mut result = ArrayVec::new();
    if let Ok(roots) = Cubic::new(a, b, c, d).solve() {
        result.extend(roots);
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::common::*;
    use arrayvec::ArrayVec;

    #[test]
    fn cube_root_keeps_sign() {
        assert!((cube_root(-8.0) + 2.0).abs() < 1e-15);
        assert!((cube_root(8.0) - 2.0).abs() < 1e-15);
        assert_eq!(cube_root(0.0), 0.0);
        assert!((cube_root(-0.001) + 0.1).abs() < 1e-15);
        assert!((cube_root(1e30) - 1e10).abs() < 1e-4);
    }

    #[test]
    fn cube_root_special_values() {
        assert!(cube_root(f64::NAN).is_nan());
        assert_eq!(cube_root(f64::INFINITY), f64::INFINITY);
        assert_eq!(cube_root(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn cube_root_inverts_cube() {
        for x in [-123.456, -1.5, -1e-6, 0.25, 7.0, 1e6] {
            let r = cube_root(x * x * x);
            assert!((r - x).abs() <= 1e-12 * x.abs(), "{x} came back as {r}");
        }
    }

    #[test]
    fn lenient_solve() {
        assert!(solve_cubic(0.0, 1.0, 1.0, 1.0).is_empty());
        assert!(solve_cubic(0.0, 0.0, 0.0, 0.0).is_empty());

        let roots = solve_cubic(2.0, -12.0, 22.0, -12.0);
        assert_eq!(roots.len(), 3);
        let mut re: ArrayVec<f64, 3> = roots.iter().map(|r| r.re).collect();
        re.sort_by(|x, y| x.total_cmp(y));
        for (got, want) in re.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }
}

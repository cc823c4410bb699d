// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of cubic equations.
//!
//! This crate solves a·x³ + b·x² + c·x + d = 0 with Cardano's method,
//! returning all three roots as complex numbers. Real roots have an
//! imaginary part of exactly zero.
//!
//! # Examples
//!
//! ```
//! use cardano::{Complex, Cubic, Regime};
//!
//! // x³ - 1 has the real root 1 and the pair -1/2 ± (√3/2)i.
//! let roots = Cubic::new(1.0, 0.0, 0.0, -1.0).solve().unwrap();
//! assert_eq!(roots.regime(), Regime::OneReal);
//! assert_eq!(roots[0], Complex::real(1.0));
//! assert_eq!(roots[1], roots[2].conj());
//! ```
//!
//! A zero leading coefficient is rejected:
//!
//! ```
//! use cardano::{Cubic, SolveError};
//!
//! assert_eq!(Cubic::new(0.0, 1.0, 1.0, 1.0).solve(), Err(SolveError::InvalidDegree));
//! ```
//!
//! [`common::solve_cubic`] is a lenient variant which returns an empty list
//! in that case instead.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! The `serde` and `schemars` features derive serialization and JSON schema
//! support for the plain data types.
//!
//! Diagnostics go through the [`log`] facade at `debug` and `trace` level.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cardano requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

pub mod common;
mod complex;
mod cubic;
mod roots;
mod tolerance;

pub use crate::complex::*;
pub use crate::cubic::*;
pub use crate::roots::*;
pub use crate::tolerance::*;

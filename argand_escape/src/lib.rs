// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argand Escape: escape-time classification of complex values.
//!
//! This crate provides a small, headless model of the classic escape-time
//! iteration `z = z² + c`: starting from an input value, it counts how many
//! squarings complete before the magnitude of `z` exceeds the escape radius
//! of `2`, up to a configurable iteration cap.
//!
//! The core concepts are:
//!
//! - [`EscapeTime`]: an immutable parameter pair (`c`, `max_iter`). Each value
//!   is fully self-contained; two instances never share state, even when
//!   built from identical parameters.
//! - [`EscapeTime::classify`]: the classification itself, a pure function of
//!   the input.
//! - [`EscapeTime::classify_traced`]: the same computation with a
//!   caller-supplied per-iteration hook, for debugging and inspection. No
//!   trace output is produced unless a hook is passed in.
//! - [`EscapeTime::into_fn`]: conversion into an opaque `Fn(Complex64) -> u32`
//!   closure, for callers that want a plain function value rather than a
//!   named type (for example, as a grid transformation).
//!
//! ## Classification values
//!
//! - `0`: the magnitude never exceeded `2` within `max_iter` completed
//!   squarings.
//! - `n > 0`: the magnitude first exceeded `2` after `n` completed squarings.
//! - `1` is overloaded: it is also returned when the *input itself* already
//!   has magnitude greater than `2`. Callers cannot distinguish
//!   "divergent on entry" from "escaped after two squarings". The overload is
//!   deliberate and left as-is; extending the value range would break callers
//!   that treat `1` as a single bucket.
//!
//! ## Minimal example
//!
//! ```rust
//! use argand_escape::EscapeTime;
//! use num_complex::Complex64;
//!
//! let esc = EscapeTime::new(Complex64::new(0.2, 0.2));
//! assert_eq!(esc.classify(Complex64::new(0.7, 0.7)), 3);
//!
//! // As an opaque function value.
//! let f = esc.into_fn();
//! assert_eq!(f(Complex64::new(0.7, 0.7)), 3);
//! ```
//!
//! ## Design notes
//!
//! - Membership tests compare squared magnitudes (`norm_sqr() <= 4.0`), which
//!   avoids a square root per iteration and is exact for the fixed radius.
//! - The iteration cap is clamped to at least `1`; a cap of `0` would make
//!   the loop arithmetic degenerate.
//!
//! This crate is `no_std`.

#![no_std]

mod escape;

pub use escape::{DEFAULT_MAX_ITER, EscapeTime};

// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex64;

/// Iteration cap used by [`EscapeTime::new`].
pub const DEFAULT_MAX_ITER: u32 = 100;

/// Squared escape radius. The iteration stops once `|z|² > 4`, i.e. `|z| > 2`.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Escape-time classifier for the iteration `z = z² + c`.
///
/// `EscapeTime` holds the additive constant `c` and the iteration cap. It is
/// a plain immutable value: classification is a pure function of the input,
/// and distinct instances are fully independent of each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeTime {
    c: Complex64,
    max_iter: u32,
}

impl EscapeTime {
    /// Creates a classifier for the constant `c` with the default iteration
    /// cap of [`DEFAULT_MAX_ITER`].
    #[must_use]
    pub fn new(c: Complex64) -> Self {
        Self {
            c,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Creates a classifier for the constant `c` with an explicit iteration
    /// cap.
    ///
    /// `max_iter` is clamped to at least `1`.
    #[must_use]
    pub fn with_max_iter(c: Complex64, max_iter: u32) -> Self {
        Self {
            c,
            max_iter: max_iter.max(1),
        }
    }

    /// Returns the additive constant `c`.
    #[must_use]
    pub fn c(&self) -> Complex64 {
        self.c
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Classifies `z0` by iterating `z = z² + c` until the magnitude of `z`
    /// exceeds `2` or the iteration cap is reached.
    ///
    /// Returns:
    /// - `0` if the magnitude never exceeded `2` within `max_iter` completed
    ///   squarings,
    /// - `n > 0` if the magnitude first exceeded `2` after `n` completed
    ///   squarings,
    /// - `1` if the input itself already has magnitude greater than `2`.
    ///
    /// The last two cases both report the literal value `1` and are not
    /// distinguishable by the caller. See the crate docs for discussion.
    #[must_use]
    pub fn classify(&self, z0: Complex64) -> u32 {
        self.classify_traced(z0, |_, _| {})
    }

    /// Like [`EscapeTime::classify`], but invokes `trace` after every
    /// squaring with the number of previously completed squarings and the
    /// new value of `z`.
    ///
    /// The hook observes intermediate values only; it cannot influence the
    /// result. [`EscapeTime::classify`] is this method with a no-op hook.
    pub fn classify_traced(
        &self,
        z0: Complex64,
        mut trace: impl FnMut(u32, Complex64),
    ) -> u32 {
        let entry = z0.norm_sqr();
        if entry > ESCAPE_RADIUS_SQR || entry.is_nan() {
            // Input already outside the escape radius. NaN sorts with
            // "outside": it can never satisfy the loop guard below.
            return 1;
        }
        let mut z = z0;
        let mut n = 0_u32;
        while z.norm_sqr() <= ESCAPE_RADIUS_SQR {
            z = z * z + self.c;
            trace(n, z);
            if n >= self.max_iter {
                n = 1;
                break;
            }
            n += 1;
        }
        // Count the squarings completed *before* the escape; the capped path
        // lands on zero through the same decrement. `n >= 1` on both exit
        // paths: the guard above ensures the loop body ran at least once.
        n - 1
    }

    /// Converts the classifier into an opaque `Fn(Complex64) -> u32` value.
    ///
    /// The closure captures its own copy of the parameters, so it stays valid
    /// and independent no matter what the caller does afterwards.
    #[must_use]
    pub fn into_fn(self) -> impl Fn(Complex64) -> u32 + Clone {
        move |z| self.classify(z)
    }
}

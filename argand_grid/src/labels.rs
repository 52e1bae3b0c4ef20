// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-label derivation.
//!
//! Labels are the textual form of the sampled coordinates along each axis.
//! They are derived on demand from the current bounds and steps — never
//! stored — so they cannot drift from the numeric state. Formatting uses
//! Rust's shortest-roundtrip `f64` `Display`, which is deterministic and
//! locale-independent.

/// Labels for columns `0..len`: the textual form of `col·x_step + x_min`.
pub(crate) fn column_labels(x_min: f64, x_step: f64, len: usize) -> Vec<String> {
    (0..len)
        .map(|col| (col as f64 * x_step + x_min).to_string())
        .collect()
}

/// Labels for rows `0..len`: the textual form of `y_max − row·y_step`.
///
/// Row `0` labels `y_max`; labels descend with the imaginary axis, matching
/// the grid's top-to-bottom row order.
pub(crate) fn row_labels(y_max: f64, y_step: f64, len: usize) -> Vec<String> {
    (0..len)
        .map(|row| (y_max - row as f64 * y_step).to_string())
        .collect()
}

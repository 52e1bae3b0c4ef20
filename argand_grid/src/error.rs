// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Validation failure raised before any grid state is mutated.
///
/// Every variant names the offending argument, and every rejecting operation
/// guarantees that on `Err` the grid's bounds, steps, transformation, and
/// cells are exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// A bound argument was NaN or infinite.
    #[error("bound `{name}` is not a finite number: {value}")]
    NonFiniteBound {
        /// Which bound was rejected (`x_min`, `x_max`, `y_min`, or `y_max`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A pan delta was NaN or infinite.
    #[error("pan delta `{name}` is not a finite number: {value}")]
    NonFinitePan {
        /// Which delta was rejected (`dx` or `dy`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

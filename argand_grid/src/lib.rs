// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argand Grid: a headless, fixed-resolution sampling of the complex plane.
//!
//! This crate models a rectangular region of the complex plane as a
//! [`SAMPLES_PER_AXIS`] × [`SAMPLES_PER_AXIS`] grid of cells. Each cell holds
//! the result of applying a caller-supplied transformation to the cell's
//! complex coordinate. The grid owns its cell buffer outright and recomputes
//! it in full — never incrementally — whenever the bounds or the
//! transformation change.
//!
//! The core concepts are:
//!
//! - [`ComplexGrid`]: bounds (held as a [`kurbo::Rect`]), derived per-axis
//!   step sizes, an opaque `Fn(Complex64) -> T` transformation, and the
//!   materialized cells.
//! - [`ComplexGrid::refresh`]: full re-evaluation of every cell from the
//!   current bounds, steps, and transformation.
//! - [`ComplexGrid::zoom`] / [`ComplexGrid::pan`]: re-bounding operations.
//!   Bounds are validated up front; on rejection nothing changes.
//! - [`ComplexGrid::set_transform`]: transformation replacement followed by a
//!   refresh.
//!
//! It does **not** render, plot, or persist anything. Callers are expected
//! to:
//! - Supply their own transformation (any `Fn(Complex64) -> T`; the
//!   `argand_escape` crate provides an escape-time classifier that fits).
//! - Read cells, coordinates, and axis labels back out for display or
//!   further processing.
//!
//! ## Layout
//!
//! Rows run from `y_max` (row `0`) down to `y_min` (last row); columns run
//! from `x_min` (column `0`) up to `x_max` (last column). Increasing row
//! index therefore means decreasing imaginary part, matching the
//! conventional top-to-bottom display of the plane. Cell `(row, col)` holds
//! `transform(col·x_step + x_min + (y_max − row·y_step)·i)`.
//!
//! ## Minimal example
//!
//! ```rust
//! use argand_grid::{ComplexGrid, SAMPLES_PER_AXIS};
//! use num_complex::Complex64;
//!
//! // Default bounds (−5..5 on both axes) and the identity transformation:
//! // every cell is its own coordinate.
//! let mut grid = ComplexGrid::new();
//! assert_eq!(*grid.cell(0, 0), Complex64::new(-5.0, 5.0));
//!
//! // Zoom to a new rectangle; the grid re-evaluates immediately.
//! grid.zoom(0.0, 10.0, 0.0, 10.0)?;
//! let last = SAMPLES_PER_AXIS - 1;
//! assert_eq!(*grid.cell(last, last), Complex64::new(10.0, 0.0));
//! # Ok::<(), argand_grid::GridError>(())
//! ```
//!
//! ## Custom transformations
//!
//! ```rust
//! use argand_grid::ComplexGrid;
//! use num_complex::Complex64;
//!
//! // A grid of squared magnitudes over the unit square.
//! let grid = ComplexGrid::with_transform(0.0, 1.0, 0.0, 1.0, |z: Complex64| z.norm_sqr())?;
//! assert_eq!(*grid.cell(0, 0), 1.0); // coordinate 0 + 1i
//! # Ok::<(), argand_grid::GridError>(())
//! ```
//!
//! ## Design notes
//!
//! - The resolution is a fixed constant, not a parameter; zooming and
//!   re-transforming never change it.
//! - Transformations are pure values shared behind an `Fn` trait object. The
//!   grid never mutates them, and the "must be callable with one complex
//!   argument" requirement is enforced by the type system.
//! - A transformation that panics during [`ComplexGrid::refresh`] propagates
//!   freely; the cell buffer must then be considered invalid until the next
//!   successful refresh.
//! - Everything is single-threaded and synchronous. Layering threads on top
//!   requires external mutual exclusion around any mutation plus the
//!   following reads.

mod error;
mod grid;
mod labels;

pub use error::GridError;
pub use grid::{ComplexGrid, GridDebugInfo, SAMPLES_PER_AXIS};

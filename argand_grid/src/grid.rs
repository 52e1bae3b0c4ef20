// Copyright 2025 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;
use num_complex::Complex64;

use crate::error::GridError;
use crate::labels;

/// Number of samples along each axis of the grid.
///
/// The resolution is fixed for the lifetime of every grid: zooming, panning,
/// and transformation replacement re-evaluate the cells but never change how
/// many there are. The step arithmetic divides by `SAMPLES_PER_AXIS - 1`, so
/// this constant must stay at least `2`.
pub const SAMPLES_PER_AXIS: usize = 21;

/// Fixed-resolution sampling of a rectangular region of the complex plane.
///
/// `ComplexGrid` tracks real bounds (as a [`Rect`]: `x0`/`x1` are
/// `x_min`/`x_max`, `y0`/`y1` are `y_min`/`y_max`), per-axis step sizes
/// derived from those bounds, and an opaque transformation mapping each
/// sampled coordinate to a cell value. It can be used to:
/// - Materialize `transform(coordinate)` over the whole rectangle.
/// - Re-bound the sampled region ([`ComplexGrid::zoom`],
///   [`ComplexGrid::pan`]) and re-evaluate.
/// - Swap the transformation ([`ComplexGrid::set_transform`]) and
///   re-evaluate.
///
/// Cells are stored row-major. Row `0` corresponds to `y_max` and the last
/// row to `y_min`; column `0` corresponds to `x_min` and the last column to
/// `x_max`.
pub struct ComplexGrid<T> {
    bounds: Rect,
    x_step: f64,
    y_step: f64,
    transform: Box<dyn Fn(Complex64) -> T>,
    cells: Vec<T>,
}

impl ComplexGrid<Complex64> {
    /// Creates a grid over the default bounds (`−5..5` on both axes) with the
    /// identity transformation, so every cell holds its own coordinate.
    ///
    /// The defaults are known-finite, so this constructor cannot fail. The
    /// grid is fully evaluated before it is returned.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(Rect::new(-5.0, -5.0, 5.0, 5.0), Box::new(|z| z))
    }
}

impl Default for ComplexGrid<Complex64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComplexGrid<T> {
    /// Creates a grid over explicit bounds with the given transformation.
    ///
    /// All four bounds must be finite; a NaN or infinite bound is rejected
    /// (naming the offending argument) before anything is constructed.
    /// Degenerate ranges (`min == max`) and inverted ranges (`min > max`)
    /// are accepted as-is and produce zero or negative steps.
    ///
    /// The grid is fully evaluated before it is returned.
    pub fn with_transform(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        transform: impl Fn(Complex64) -> T + 'static,
    ) -> Result<Self, GridError> {
        let bounds = validated_bounds(x_min, x_max, y_min, y_max)?;
        Ok(Self::from_validated(bounds, Box::new(transform)))
    }

    fn from_validated(bounds: Rect, transform: Box<dyn Fn(Complex64) -> T>) -> Self {
        let (x_step, y_step) = steps_for(bounds);
        let mut grid = Self {
            bounds,
            x_step,
            y_step,
            transform,
            cells: Vec::new(),
        };
        grid.refresh();
        grid
    }

    /// Re-evaluates every cell from the current bounds, steps, and
    /// transformation.
    ///
    /// The whole buffer is recomputed unconditionally; any prior contents are
    /// overwritten. Calling this twice in a row yields identical cells.
    ///
    /// A panic raised by the transformation propagates out of this method and
    /// leaves the previous cells in place; the grid must then be treated as
    /// invalid until a refresh completes.
    pub fn refresh(&mut self) {
        let mut cells = Vec::with_capacity(SAMPLES_PER_AXIS * SAMPLES_PER_AXIS);
        for row in 0..SAMPLES_PER_AXIS {
            for col in 0..SAMPLES_PER_AXIS {
                cells.push((self.transform)(self.coordinate(row, col)));
            }
        }
        self.cells = cells;
    }

    /// Replaces the sampled rectangle and re-evaluates the grid.
    ///
    /// All four bounds are validated before any mutation: on `Err`, the
    /// bounds, steps, and cells are exactly as they were before the call.
    /// Degenerate and inverted ranges are accepted, as in
    /// [`ComplexGrid::with_transform`].
    pub fn zoom(
        &mut self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<(), GridError> {
        let bounds = validated_bounds(x_min, x_max, y_min, y_max)?;
        self.bounds = bounds;
        let (x_step, y_step) = steps_for(bounds);
        self.x_step = x_step;
        self.y_step = y_step;
        self.refresh();
        Ok(())
    }

    /// Shifts the sampled rectangle by `(dx, dy)` and re-evaluates the grid.
    ///
    /// Both deltas must be finite; the shifted bounds are then validated like
    /// any other re-bounding, so the same atomicity guarantee applies. Step
    /// sizes are unaffected by a pure shift.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), GridError> {
        for (name, value) in [("dx", dx), ("dy", dy)] {
            if !value.is_finite() {
                return Err(GridError::NonFinitePan { name, value });
            }
        }
        self.zoom(
            self.bounds.x0 + dx,
            self.bounds.x1 + dx,
            self.bounds.y0 + dy,
            self.bounds.y1 + dy,
        )
    }

    /// Replaces the transformation and re-evaluates the grid.
    ///
    /// The requirement that the transformation be callable with a single
    /// complex argument is enforced by the type system, so this operation has
    /// no failure mode of its own.
    pub fn set_transform(&mut self, transform: impl Fn(Complex64) -> T + 'static) {
        self.transform = Box::new(transform);
        self.refresh();
    }

    /// Returns the complex coordinate sampled at `(row, col)`.
    ///
    /// Row `0` is `y_max`, the last row is `y_min`; column `0` is `x_min`,
    /// the last column is `x_max`.
    #[must_use]
    pub fn coordinate(&self, row: usize, col: usize) -> Complex64 {
        let re = col as f64 * self.x_step + self.bounds.x0;
        let im = self.bounds.y1 - row as f64 * self.y_step;
        Complex64::new(re, im)
    }

    /// Returns the cell value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`SAMPLES_PER_AXIS`].
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &T {
        assert!(
            row < SAMPLES_PER_AXIS && col < SAMPLES_PER_AXIS,
            "cell index ({row}, {col}) out of range"
        );
        &self.cells[row * SAMPLES_PER_AXIS + col]
    }

    /// Returns the whole cell buffer, row-major.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns an iterator over the rows of the grid, top (`y_max`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(SAMPLES_PER_AXIS)
    }

    /// Returns the lower real bound.
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.bounds.x0
    }

    /// Returns the upper real bound.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.bounds.x1
    }

    /// Returns the lower imaginary bound.
    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.bounds.y0
    }

    /// Returns the upper imaginary bound.
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.bounds.y1
    }

    /// Returns the sampled rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the spacing between adjacent samples along the real axis.
    #[must_use]
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    /// Returns the spacing between adjacent samples along the imaginary axis.
    #[must_use]
    pub fn y_step(&self) -> f64 {
        self.y_step
    }

    /// Returns the number of samples along the real axis.
    #[must_use]
    pub fn x_len(&self) -> usize {
        SAMPLES_PER_AXIS
    }

    /// Returns the number of samples along the imaginary axis.
    #[must_use]
    pub fn y_len(&self) -> usize {
        SAMPLES_PER_AXIS
    }

    /// Returns display labels for the columns: the textual form of each
    /// sampled real coordinate, `x_min` first.
    ///
    /// Labels are derived from the current bounds and steps on every call, so
    /// they can never drift from the numeric state.
    #[must_use]
    pub fn column_labels(&self) -> Vec<String> {
        labels::column_labels(self.bounds.x0, self.x_step, SAMPLES_PER_AXIS)
    }

    /// Returns display labels for the rows: the textual form of each sampled
    /// imaginary coordinate, `y_max` first.
    ///
    /// Derived on demand, like [`ComplexGrid::column_labels`].
    #[must_use]
    pub fn row_labels(&self) -> Vec<String> {
        labels::row_labels(self.bounds.y1, self.y_step, SAMPLES_PER_AXIS)
    }

    /// Snapshot of the current grid geometry for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridDebugInfo {
        GridDebugInfo {
            bounds: self.bounds,
            x_step: self.x_step,
            y_step: self.y_step,
            x_len: SAMPLES_PER_AXIS,
            y_len: SAMPLES_PER_AXIS,
        }
    }
}

impl<T> fmt::Debug for ComplexGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplexGrid")
            .field("bounds", &self.bounds)
            .field("x_step", &self.x_step)
            .field("y_step", &self.y_step)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`ComplexGrid`]'s geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDebugInfo {
    /// The sampled rectangle.
    pub bounds: Rect,
    /// Spacing between adjacent samples along the real axis.
    pub x_step: f64,
    /// Spacing between adjacent samples along the imaginary axis.
    pub y_step: f64,
    /// Number of samples along the real axis.
    pub x_len: usize,
    /// Number of samples along the imaginary axis.
    pub y_len: usize,
}

fn validated_bounds(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) -> Result<Rect, GridError> {
    for (name, value) in [
        ("x_min", x_min),
        ("x_max", x_max),
        ("y_min", y_min),
        ("y_max", y_max),
    ] {
        if !value.is_finite() {
            return Err(GridError::NonFiniteBound { name, value });
        }
    }
    // `Rect::new` keeps the coordinates exactly as given; inverted ranges
    // stay inverted.
    Ok(Rect::new(x_min, y_min, x_max, y_max))
}

fn steps_for(bounds: Rect) -> (f64, f64) {
    let denom = (SAMPLES_PER_AXIS - 1) as f64;
    (
        (bounds.x1 - bounds.x0) / denom,
        (bounds.y1 - bounds.y0) / denom,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use num_complex::Complex64;

    use super::{ComplexGrid, GridError, SAMPLES_PER_AXIS};

    const LAST: usize = SAMPLES_PER_AXIS - 1;

    #[test]
    fn default_grid_cells_are_coordinates() {
        let grid = ComplexGrid::new();
        assert_eq!(grid.x_min(), -5.0);
        assert_eq!(grid.x_max(), 5.0);
        assert_eq!(grid.y_min(), -5.0);
        assert_eq!(grid.y_max(), 5.0);
        assert_eq!(grid.x_step(), 0.5);
        assert_eq!(grid.y_step(), 0.5);

        assert_eq!(*grid.cell(0, 0), Complex64::new(-5.0, 5.0));
        assert_eq!(*grid.cell(LAST, LAST), Complex64::new(5.0, -5.0));
        for row in 0..SAMPLES_PER_AXIS {
            for col in 0..SAMPLES_PER_AXIS {
                assert_eq!(*grid.cell(row, col), grid.coordinate(row, col));
            }
        }
    }

    #[test]
    fn resolution_is_fixed_and_valid() {
        let grid = ComplexGrid::new();
        assert!(grid.x_len() >= 2);
        assert_eq!(grid.x_len(), SAMPLES_PER_AXIS);
        assert_eq!(grid.y_len(), SAMPLES_PER_AXIS);
        assert_eq!(grid.cells().len(), SAMPLES_PER_AXIS * SAMPLES_PER_AXIS);
    }

    #[test]
    fn corners_follow_bounds() {
        let grid =
            ComplexGrid::with_transform(2.0, 6.0, -6.0, -2.0, |z| z).unwrap();
        assert_eq!(*grid.cell(0, 0), Complex64::new(2.0, -2.0));
        assert_eq!(*grid.cell(LAST, LAST), Complex64::new(6.0, -6.0));
    }

    #[test]
    fn rows_iterate_top_first() {
        let grid = ComplexGrid::new();
        let rows: Vec<&[Complex64]> = grid.rows().collect();
        assert_eq!(rows.len(), SAMPLES_PER_AXIS);
        assert_eq!(rows[0][0], Complex64::new(-5.0, 5.0));
        assert_eq!(rows[LAST][0], Complex64::new(-5.0, -5.0));
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut grid = ComplexGrid::new();
        let before = grid.cells().to_vec();
        grid.refresh();
        assert_eq!(grid.cells(), &before[..]);
        grid.refresh();
        assert_eq!(grid.cells(), &before[..]);
    }

    #[test]
    fn refresh_restores_corrupted_cells() {
        let mut grid = ComplexGrid::new();
        let expected = grid.cells().to_vec();

        // Same-module access: clobber the buffer behind the accessors' back.
        for cell in &mut grid.cells {
            *cell = Complex64::new(-1.0, -1.0);
        }
        assert_ne!(grid.cells(), &expected[..]);

        grid.refresh();
        assert_eq!(grid.cells(), &expected[..]);
    }

    #[test]
    fn zoom_rebounds_and_reevaluates() {
        let mut grid =
            ComplexGrid::with_transform(100.0, 200.0, -100.0, 0.0, |z| z).unwrap();
        grid.zoom(0.0, 10.0, 0.0, 10.0).unwrap();

        assert_eq!(grid.x_step(), 0.5);
        assert_eq!(grid.y_step(), 0.5);
        assert_eq!(*grid.cell(0, 0), Complex64::new(0.0, 10.0));
        assert_eq!(*grid.cell(LAST, LAST), Complex64::new(10.0, 0.0));
    }

    #[test]
    fn zoom_rejects_non_finite_bound_without_mutating() {
        let mut grid =
            ComplexGrid::with_transform(100.0, 200.0, -100.0, 0.0, |z| z).unwrap();
        let bounds_before = grid.bounds();
        let steps_before = (grid.x_step(), grid.y_step());
        let cells_before = grid.cells().to_vec();

        let err = grid.zoom(f64::NAN, 10.0, -1.0, 3.0).unwrap_err();
        assert!(matches!(
            err,
            GridError::NonFiniteBound { name: "x_min", .. }
        ));

        assert_eq!(grid.bounds(), bounds_before);
        assert_eq!((grid.x_step(), grid.y_step()), steps_before);
        assert_eq!(grid.cells(), &cells_before[..]);
    }

    #[test]
    fn zoom_error_names_each_offending_bound() {
        let mut grid = ComplexGrid::new();
        let cases = [
            (grid.zoom(f64::INFINITY, 1.0, 0.0, 1.0), "x_min"),
            (grid.zoom(0.0, f64::NAN, 0.0, 1.0), "x_max"),
            (grid.zoom(0.0, 1.0, f64::NEG_INFINITY, 1.0), "y_min"),
            (grid.zoom(0.0, 1.0, 0.0, f64::NAN), "y_max"),
        ];
        for (result, expected) in cases {
            match result.unwrap_err() {
                GridError::NonFiniteBound { name, .. } => assert_eq!(name, expected),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn degenerate_and_inverted_ranges_are_accepted() {
        let mut grid = ComplexGrid::new();
        grid.zoom(5.0, 5.0, 10.0, 0.0).unwrap();

        assert_eq!(grid.x_step(), 0.0);
        assert_eq!(grid.y_step(), -0.5);
        // Every column collapses onto x = 5; rows climb because the range is
        // inverted.
        assert_eq!(*grid.cell(0, 0), Complex64::new(5.0, 0.0));
        assert_eq!(*grid.cell(1, 0), Complex64::new(5.0, 0.5));
        assert_eq!(*grid.cell(LAST, LAST), Complex64::new(5.0, 10.0));
    }

    #[test]
    fn pan_shifts_every_coordinate() {
        let mut grid = ComplexGrid::new();
        grid.pan(1.5, -2.0).unwrap();

        assert_eq!(grid.bounds(), Rect::new(-3.5, -7.0, 6.5, 3.0));
        assert_eq!(grid.x_step(), 0.5);
        assert_eq!(grid.y_step(), 0.5);
        assert_eq!(*grid.cell(0, 0), Complex64::new(-3.5, 3.0));
        assert_eq!(*grid.cell(LAST, LAST), Complex64::new(6.5, -7.0));
    }

    #[test]
    fn pan_rejects_non_finite_delta_without_mutating() {
        let mut grid = ComplexGrid::new();
        let bounds_before = grid.bounds();
        let cells_before = grid.cells().to_vec();

        let err = grid.pan(f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(err, GridError::NonFinitePan { name: "dx", .. }));
        let err = grid.pan(0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, GridError::NonFinitePan { name: "dy", .. }));

        assert_eq!(grid.bounds(), bounds_before);
        assert_eq!(grid.cells(), &cells_before[..]);
    }

    #[test]
    fn set_transform_reevaluates_all_cells() {
        let mut grid =
            ComplexGrid::with_transform(0.0, 10.0, 0.0, 10.0, |z| z).unwrap();
        grid.set_transform(|z| z * 2.0);

        for row in 0..SAMPLES_PER_AXIS {
            for col in 0..SAMPLES_PER_AXIS {
                assert_eq!(*grid.cell(row, col), grid.coordinate(row, col) * 2.0);
            }
        }
    }

    #[test]
    fn scalar_valued_transforms_are_supported() {
        let grid =
            ComplexGrid::with_transform(-1.0, 1.0, -1.0, 1.0, |z: Complex64| {
                z.norm_sqr()
            })
            .unwrap();
        assert_eq!(*grid.cell(0, 0), 2.0);
        let mid = SAMPLES_PER_AXIS / 2;
        assert_eq!(*grid.cell(mid, mid), 0.0);
    }

    #[test]
    fn with_transform_rejects_non_finite_bound() {
        let result = ComplexGrid::with_transform(0.0, f64::NAN, 0.0, 1.0, |z| z);
        assert!(matches!(
            result.unwrap_err(),
            GridError::NonFiniteBound { name: "x_max", .. }
        ));
    }

    #[test]
    fn labels_match_bounds_and_steps() {
        let mut grid = ComplexGrid::new();
        let columns = grid.column_labels();
        let rows = grid.row_labels();
        assert_eq!(columns.len(), SAMPLES_PER_AXIS);
        assert_eq!(rows.len(), SAMPLES_PER_AXIS);
        assert_eq!(columns[0], "-5");
        assert_eq!(columns[LAST], "5");
        assert_eq!(rows[0], "5");
        assert_eq!(rows[LAST], "-5");

        // Labels are derived, so they track a zoom with no extra bookkeeping.
        grid.zoom(0.0, 10.0, 0.0, 10.0).unwrap();
        assert_eq!(grid.column_labels()[0], "0");
        assert_eq!(grid.column_labels()[1], "0.5");
        assert_eq!(grid.row_labels()[0], "10");
    }

    #[test]
    fn debug_info_reports_geometry() {
        let grid = ComplexGrid::new();
        let info = grid.debug_info();
        assert_eq!(info.bounds, grid.bounds());
        assert_eq!(info.x_step, 0.5);
        assert_eq!(info.y_step, 0.5);
        assert_eq!(info.x_len, SAMPLES_PER_AXIS);
        assert_eq!(info.y_len, SAMPLES_PER_AXIS);
    }
}

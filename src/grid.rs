//! Grid geometry: rotated hole coordinates and canonical grid traversal.
//!
//! Every export format funnels through [`build_grid`] so that hole
//! numbering and coordinates are identical across formats for the same
//! inputs.

use crate::model::InputParameters;

/// Precompute the rotation angle into its cosine and sine.
pub fn precompute_rotation(rotation_degrees: f64) -> (f64, f64) {
    let angle_rad = rotation_degrees.to_radians();
    (angle_rad.cos(), angle_rad.sin())
}

/// Plan coordinates of the grid cell `(row, col)`.
///
/// Starts from the unrotated point `(base_x + col*distance,
/// base_y + row*distance)` and rotates it around the base point.
/// Increasing `row` increases `y`; the sine terms follow the same
/// convention, and every format must use this function so the convention
/// stays uniform. Deterministic and side-effect free.
pub fn cell_coords(
    inputs: &InputParameters,
    cos_angle: f64,
    sin_angle: f64,
    row: i32,
    col: i32,
) -> (f64, f64) {
    let x = inputs.base_x + col as f64 * inputs.distance;
    let y = inputs.base_y + row as f64 * inputs.distance;

    let rel_x = x - inputs.base_x;
    let rel_y = y - inputs.base_y;

    let x = inputs.base_x + rel_x * cos_angle - rel_y * sin_angle;
    let y = inputs.base_y + rel_x * sin_angle + rel_y * cos_angle;

    (x, y)
}

/// Build one output record per grid cell.
///
/// Iterates `row` outer, `col` inner; this nesting order is the canonical
/// hole-numbering order and is preserved exactly, since external systems
/// match holes by the `{row:02}{col:02}` number derived from it. Assumes
/// the inputs have already passed [`InputParameters::validate`].
pub fn build_grid<T>(
    inputs: &InputParameters,
    mut cell_factory: impl FnMut(i32, i32, &InputParameters, (f64, f64)) -> T,
) -> Vec<T> {
    let (cos_angle, sin_angle) = precompute_rotation(inputs.rotation_angle);
    let mut objects = Vec::with_capacity(inputs.cell_count() as usize);

    for row in 0..inputs.max_row {
        for col in 0..inputs.max_col {
            let coords = cell_coords(inputs, cos_angle, sin_angle, row, col);
            objects.push(cell_factory(row, col, inputs, coords));
        }
    }
    objects
}

/// The four physical corners of the grid, in block polygon order.
pub fn corner_points(inputs: &InputParameters) -> [(f64, f64); 4] {
    let (cos_angle, sin_angle) = precompute_rotation(inputs.rotation_angle);
    let corner_indices = [
        (0, 0),
        (0, inputs.max_col - 1),
        (inputs.max_row - 1, inputs.max_col - 1),
        (inputs.max_row - 1, 0),
    ];
    corner_indices.map(|(row, col)| cell_coords(inputs, cos_angle, sin_angle, row, col))
}

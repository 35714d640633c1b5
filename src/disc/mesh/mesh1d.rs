use ndarray::Array1;

use crate::error::{SolverError, SolverResult, ensure_positive};

/// Evenly spaced nodes on `[left_coord, right_coord]`.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub node_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
    pub dx: f64,
    pub x: Array1<f64>,
}
impl Mesh1d {
    pub fn new(node_num: usize, left_coord: f64, right_coord: f64) -> SolverResult<Self> {
        if node_num < 2 {
            return Err(SolverError::invalid_argument(
                "node_num",
                format!("at least 2 nodes are required, got {}", node_num),
            ));
        }
        let length = right_coord - left_coord;
        ensure_positive("domain_length", length)?;
        let dx = length / (node_num - 1) as f64;
        let x = Array1::from_shape_fn(node_num, |i| left_coord + i as f64 * dx);
        Ok(Self {
            node_num,
            left_coord,
            right_coord,
            dx,
            x,
        })
    }
    pub fn domain_length(&self) -> f64 {
        self.right_coord - self.left_coord
    }
    /// Index of the node at or to the left of `coord`, measured from the
    /// left end. Truncates toward zero.
    pub fn floor_index(&self, coord: f64) -> usize {
        ((coord - self.left_coord) / self.dx) as usize
    }
}

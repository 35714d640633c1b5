use csv::Writer;
use ndarray::ArrayView1;
use serde::Serialize;
use std::io::Write;

use crate::{
    disc::mesh::mesh1d::Mesh1d,
    error::{SolverError, SolverResult},
};

#[derive(Serialize)]
struct PointData {
    x: f64,
    solution: f64,
}

/// Writes one `x,solution` row per node, preceded by a header row.
pub fn write_to_csv<W: Write>(
    writer: W,
    solutions: ArrayView1<f64>,
    mesh: &Mesh1d,
) -> SolverResult<()> {
    if solutions.len() != mesh.node_num {
        return Err(SolverError::LengthMismatch {
            expected: mesh.node_num,
            provided: solutions.len(),
        });
    }
    let mut writer = Writer::from_writer(writer);
    for (x, solution) in mesh.x.iter().zip(solutions.iter()) {
        writer.serialize(PointData {
            x: *x,
            solution: *solution,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_rows() {
        let mesh = Mesh1d::new(3, 0.0, 1.0).unwrap();
        let solutions = array![1.0, 2.0, 1.5];
        let mut buffer = Vec::new();
        write_to_csv(&mut buffer, solutions.view(), &mesh).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["x,solution", "0.0,1.0", "0.5,2.0", "1.0,1.5"]);
    }

    #[test]
    fn test_length_mismatch() {
        let mesh = Mesh1d::new(3, 0.0, 1.0).unwrap();
        let solutions = array![1.0, 2.0];
        let result = write_to_csv(Vec::new(), solutions.view(), &mesh);
        assert!(matches!(result, Err(SolverError::LengthMismatch { .. })));
    }
}

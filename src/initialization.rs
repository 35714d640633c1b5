use ndarray::Array1;
use std::path::Path;
use tracing::info;

use crate::{
    disc::mesh::mesh1d::Mesh1d,
    error::SolverResult,
    io::param_parser::SolverParamParser,
    solver::SolverParameters,
};

/// Piecewise-constant initial condition: `plateau` on a sub-interval,
/// `baseline` elsewhere, boundary nodes included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HatProfile {
    pub baseline: f64,
    pub plateau: f64,
    pub lower: f64,
    pub upper: f64,
    /// Whether the node at `upper` belongs to the plateau.
    pub include_upper: bool,
}
impl HatProfile {
    /// Plateau on nodes `trunc(0.5/dx) .. trunc(1/dx + 1)`.
    pub fn linear_script() -> Self {
        Self {
            baseline: 1.0,
            plateau: 2.0,
            lower: 0.5,
            upper: 1.0,
            include_upper: true,
        }
    }
    /// Plateau on nodes `trunc(0.5/dx) .. trunc(1/dx)`, one node narrower
    /// than the linear scenario.
    pub fn nonlinear_script() -> Self {
        Self {
            include_upper: false,
            ..Self::linear_script()
        }
    }
    /// Half-open node range covered by the plateau, clamped to the mesh.
    pub fn index_range(&self, mesh: &Mesh1d) -> (usize, usize) {
        let start = mesh.floor_index(self.lower);
        let end = if self.include_upper {
            ((self.upper - mesh.left_coord) / mesh.dx + 1.0) as usize
        } else {
            mesh.floor_index(self.upper)
        };
        let end = end.min(mesh.node_num);
        (start.min(end), end)
    }
}

pub fn initialize_params_by_file(
    file_path: impl AsRef<Path>,
) -> SolverResult<(SolverParameters, HatProfile)> {
    let parser = SolverParamParser::parse(file_path)?;
    Ok((parser.solver_params()?, parser.hat_profile()))
}
pub fn initialize_mesh1d(solver_params: &SolverParameters) -> SolverResult<Mesh1d> {
    let mesh = Mesh1d::new(solver_params.point_count, 0.0, solver_params.domain_length)?;
    info!(dx = mesh.dx, "spatial resolution");
    info!(dt = solver_params.dt, "temporal resolution");
    info!(steps = solver_params.step_count, "number of time steps");
    Ok(mesh)
}
pub fn initialize_hat(mesh: &Mesh1d, hat: &HatProfile) -> Array1<f64> {
    let (start, end) = hat.index_range(mesh);
    Array1::from_shape_fn(mesh.node_num, |i| {
        if (start..end).contains(&i) {
            hat.plateau
        } else {
            hat.baseline
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_hats_differ_by_one_node() {
        let mesh = initialize_mesh1d(&SolverParameters::linear_reference()).unwrap();
        assert_eq!(HatProfile::linear_script().index_range(&mesh), (10, 21));
        assert_eq!(HatProfile::nonlinear_script().index_range(&mesh), (10, 20));

        let linear = initialize_hat(&mesh, &HatProfile::linear_script());
        let nonlinear = initialize_hat(&mesh, &HatProfile::nonlinear_script());
        assert_eq!(linear.iter().filter(|u| **u == 2.0).count(), 11);
        assert_eq!(nonlinear.iter().filter(|u| **u == 2.0).count(), 10);
        assert_eq!(linear[0], 1.0);
        assert_eq!(linear[40], 1.0);
        assert_eq!(linear[20], 2.0);
        assert_eq!(nonlinear[20], 1.0);
    }

    #[test]
    fn test_input_files_match_presets() {
        let inputs = Path::new(env!("CARGO_MANIFEST_DIR")).join("inputs");
        let (params, hat) = initialize_params_by_file(inputs.join("linear.json")).unwrap();
        assert_eq!(params, SolverParameters::linear_reference());
        assert_eq!(hat, HatProfile::linear_script());
        let (params, hat) = initialize_params_by_file(inputs.join("nonlinear.json")).unwrap();
        assert_eq!(params, SolverParameters::nonlinear_reference());
        assert_eq!(hat, HatProfile::nonlinear_script());
    }

    #[test]
    fn test_hat_range_is_clamped() {
        let mesh = Mesh1d::new(11, 0.0, 1.0).unwrap();
        let hat = HatProfile {
            baseline: 0.0,
            plateau: 1.0,
            lower: 0.8,
            upper: 5.0,
            include_upper: true,
        };
        assert_eq!(hat.index_range(&mesh), (8, 11));
        let inverted = HatProfile {
            lower: 3.0,
            upper: 0.2,
            ..hat
        };
        let u = initialize_hat(&mesh, &inverted);
        assert!(u.iter().all(|v| *v == 0.0));
    }
}

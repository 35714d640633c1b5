use ndarray::{Array1, ArrayView1};
use tracing::{info, warn};

use crate::{
    disc::{
        convection1d::{ConvectionMode, Disc1dConvection},
        mesh::mesh1d::Mesh1d,
    },
    error::{SolverError, SolverResult, ensure_positive},
};

/// Scheme parameters for one integration run.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    pub domain_length: f64,
    pub point_count: usize,
    pub dt: f64,
    pub step_count: usize,
    /// Present for linear convection, absent for non-linear.
    pub wave_speed: Option<f64>,
}
impl SolverParameters {
    pub fn linear_reference() -> Self {
        Self {
            domain_length: 2.0,
            point_count: 41,
            dt: 0.025,
            step_count: 25,
            wave_speed: Some(1.0),
        }
    }
    pub fn nonlinear_reference() -> Self {
        Self {
            wave_speed: None,
            ..Self::linear_reference()
        }
    }
    /// Builds parameters from a signed step count, as read from a
    /// parameter file.
    pub fn with_signed_steps(
        domain_length: f64,
        point_count: usize,
        dt: f64,
        step_count: i64,
        wave_speed: Option<f64>,
    ) -> SolverResult<Self> {
        let step_count = usize::try_from(step_count).map_err(|_| {
            SolverError::invalid_argument(
                "step_count",
                format!("must be >= 0, got {}", step_count),
            )
        })?;
        let params = Self {
            domain_length,
            point_count,
            dt,
            step_count,
            wave_speed,
        };
        params.validate()?;
        Ok(params)
    }
    pub fn validate(&self) -> SolverResult<()> {
        if self.point_count < 2 {
            return Err(SolverError::invalid_argument(
                "point_count",
                format!("at least 2 points are required, got {}", self.point_count),
            ));
        }
        ensure_positive("domain_length", self.domain_length)?;
        ensure_positive("dt", self.dt)?;
        if let Some(wave_speed) = self.wave_speed {
            if !wave_speed.is_finite() {
                return Err(SolverError::invalid_argument(
                    "wave_speed",
                    format!("must be finite, got {}", wave_speed),
                ));
            }
        }
        Ok(())
    }
    pub fn dx(&self) -> f64 {
        self.domain_length / (self.point_count - 1) as f64
    }
    pub fn mode(&self) -> ConvectionMode {
        ConvectionMode::from_wave_speed(self.wave_speed)
    }
}

/// Owns the grid and the field for a single run.
pub struct Solver<'a> {
    pub mesh: &'a Mesh1d,
    pub solver_params: &'a SolverParameters,
    solutions: Array1<f64>,
    disc: Disc1dConvection,
}
impl<'a> Solver<'a> {
    pub fn new(
        mesh: &'a Mesh1d,
        solutions: Array1<f64>,
        solver_params: &'a SolverParameters,
    ) -> SolverResult<Self> {
        solver_params.validate()?;
        if mesh.node_num != solver_params.point_count {
            return Err(SolverError::LengthMismatch {
                expected: solver_params.point_count,
                provided: mesh.node_num,
            });
        }
        if solutions.len() != mesh.node_num {
            return Err(SolverError::LengthMismatch {
                expected: mesh.node_num,
                provided: solutions.len(),
            });
        }
        let disc = Disc1dConvection::from_mesh(mesh, solver_params.dt, solver_params.mode())?;
        Ok(Self {
            mesh,
            solver_params,
            solutions,
            disc,
        })
    }
    pub fn solve(&mut self) {
        info!(
            mode = ?self.disc.mode,
            steps = self.solver_params.step_count,
            "integrating"
        );
        let remaining = self
            .solver_params
            .step_count
            .saturating_sub(self.disc.current_step);
        self.disc.integrate(self.solutions.view_mut(), remaining);
        if !self.is_finite() {
            warn!(
                step = self.disc.current_step,
                "solution contains non-finite values"
            );
        }
    }
    pub fn current_step(&self) -> usize {
        self.disc.current_step
    }
    pub fn current_time(&self) -> f64 {
        self.disc.current_time
    }
    pub fn field(&self) -> ArrayView1<'_, f64> {
        self.solutions.view()
    }
    pub fn into_field(self) -> Array1<f64> {
        self.solutions
    }
    pub fn is_finite(&self) -> bool {
        self.solutions.iter().all(|u| u.is_finite())
    }
}

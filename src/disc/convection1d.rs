//! Explicit forward-time, backward-space (upwind) differencing for 1D
//! convection.
//!
//! Every step reads only the previous time level. The previous level is
//! copied into a snapshot buffer before the sweep, so `field[i]` is always
//! computed from `snapshot[i]` and `snapshot[i - 1]`, never from a value
//! already overwritten in the same sweep. Index 0 is a Dirichlet node and
//! is never written.
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use tracing::debug;

use crate::{
    disc::mesh::mesh1d::Mesh1d,
    error::{SolverResult, ensure_positive},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvectionMode {
    /// `u_t + c u_x = 0`
    Linear { wave_speed: f64 },
    /// `u_t + u u_x = 0`
    NonLinear,
}
impl ConvectionMode {
    pub fn from_wave_speed(wave_speed: Option<f64>) -> Self {
        match wave_speed {
            Some(wave_speed) => ConvectionMode::Linear { wave_speed },
            None => ConvectionMode::NonLinear,
        }
    }
}

fn sweep_linear(mut field: ArrayViewMut1<f64>, snapshot: ArrayView1<f64>, dx: f64, dt: f64, wave_speed: f64) {
    let coeff = wave_speed * dt / dx;
    for i in 1..field.len() {
        field[i] = snapshot[i] - coeff * (snapshot[i] - snapshot[i - 1]);
    }
}
fn sweep_nonlinear(mut field: ArrayViewMut1<f64>, snapshot: ArrayView1<f64>, dx: f64, dt: f64) {
    let ratio = dt / dx;
    for i in 1..field.len() {
        field[i] = snapshot[i] - ratio * snapshot[i] * (snapshot[i] - snapshot[i - 1]);
    }
}

/// One linear convection step on `field`, in place.
pub fn step_linear(field: ArrayViewMut1<f64>, dx: f64, dt: f64, wave_speed: f64) -> SolverResult<()> {
    ensure_positive("dx", dx)?;
    ensure_positive("dt", dt)?;
    let snapshot = field.to_owned();
    sweep_linear(field, snapshot.view(), dx, dt, wave_speed);
    Ok(())
}

/// One non-linear convection step on `field`, in place. The local value is
/// the advection speed.
pub fn step_nonlinear(field: ArrayViewMut1<f64>, dx: f64, dt: f64) -> SolverResult<()> {
    ensure_positive("dx", dx)?;
    ensure_positive("dt", dt)?;
    let snapshot = field.to_owned();
    sweep_nonlinear(field, snapshot.view(), dx, dt);
    Ok(())
}

/// Applies `steps` steps of the selected scheme. Non-finite values produced
/// by an unstable parameter combination are returned as they are.
pub fn integrate(
    field: ArrayViewMut1<f64>,
    dx: f64,
    dt: f64,
    steps: usize,
    mode: ConvectionMode,
) -> SolverResult<()> {
    let mut disc = Disc1dConvection::new(dx, dt, field.len(), mode)?;
    disc.integrate(field, steps);
    Ok(())
}

/// Double-buffered stepper. The snapshot buffer is allocated once and
/// refreshed from the field at the start of every step.
pub struct Disc1dConvection {
    pub current_time: f64,
    pub current_step: usize,
    pub mode: ConvectionMode,
    dx: f64,
    dt: f64,
    snapshot: Array1<f64>,
}
impl Disc1dConvection {
    pub fn new(dx: f64, dt: f64, node_num: usize, mode: ConvectionMode) -> SolverResult<Self> {
        ensure_positive("dx", dx)?;
        ensure_positive("dt", dt)?;
        if let ConvectionMode::Linear { wave_speed } = mode {
            debug!(courant = wave_speed.abs() * dt / dx, "linear convection");
        }
        Ok(Self {
            current_time: 0.0,
            current_step: 0,
            mode,
            dx,
            dt,
            snapshot: Array1::zeros(node_num),
        })
    }
    pub fn from_mesh(mesh: &Mesh1d, dt: f64, mode: ConvectionMode) -> SolverResult<Self> {
        Self::new(mesh.dx, dt, mesh.node_num, mode)
    }
    pub fn dx(&self) -> f64 {
        self.dx
    }
    pub fn dt(&self) -> f64 {
        self.dt
    }
    pub fn advance(&mut self, field: ArrayViewMut1<f64>) {
        if self.snapshot.len() != field.len() {
            self.snapshot = Array1::zeros(field.len());
        }
        self.snapshot.assign(&field);
        match self.mode {
            ConvectionMode::Linear { wave_speed } => {
                sweep_linear(field, self.snapshot.view(), self.dx, self.dt, wave_speed)
            }
            ConvectionMode::NonLinear => sweep_nonlinear(field, self.snapshot.view(), self.dx, self.dt),
        }
        self.current_step += 1;
        self.current_time += self.dt;
    }
    pub fn integrate(&mut self, mut field: ArrayViewMut1<f64>, steps: usize) {
        for _ in 0..steps {
            self.advance(field.view_mut());
        }
    }
}

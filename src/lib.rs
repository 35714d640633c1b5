pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;
pub mod solver;

pub use disc::convection1d::{ConvectionMode, integrate, step_linear, step_nonlinear};
pub use error::{SolverError, SolverResult};

pub mod convection1d;
pub mod mesh;

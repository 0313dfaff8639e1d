//! Enzo-hll is a first-order finite-volume solver for the one-dimensional
//! compressible Euler equations on a uniform mesh, built around the HLL
//! approximate Riemann solver. It advances a shock-tube (Riemann problem)
//! initial condition with CFL-limited explicit time steps and writes a time
//! series of CSV flow-field snapshots, primarily for validating
//! shock-capturing numerics against analytic or reference solutions.

pub mod boundary;
pub mod config;
pub mod driver;
pub mod hydro;
pub mod mesh;
pub mod output;
pub mod solver;

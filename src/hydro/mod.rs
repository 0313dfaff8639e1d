pub mod euler;

pub use euler::{riemann_hll, Conserved, Primitive, FLOOR};

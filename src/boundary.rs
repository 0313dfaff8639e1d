use std::str::FromStr;

use crate::config::Error;
use crate::hydro::Primitive;

// ============================================================================
#[derive(Clone, Copy, Debug, PartialEq, Eq)]

/**
 * Boundary treatment at the two domain edges. The policy is ghost-free: it
 * derives a synthetic edge state from the adjacent interior cell, consumed
 * only by the flux pass, and never mutates the stored state.
 */
pub enum BoundaryCondition {
    /// Zero-gradient extrapolation; waves leave the domain freely.
    Outflow,
    /// Solid wall; the edge state mirrors the interior velocity.
    Reflective,
}

// ============================================================================
impl BoundaryCondition {
    /**
     * The virtual state flanking a domain edge, given the primitive state
     * of the adjacent interior cell.
     */
    pub fn edge_state(&self, interior: Primitive) -> Primitive {
        match self {
            BoundaryCondition::Outflow => interior,
            BoundaryCondition::Reflective => interior.reflect(),
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "outflow" | "transmissive" => Ok(BoundaryCondition::Outflow),
            "reflective" => Ok(BoundaryCondition::Reflective),
            _ => Err(Error::UnknownBoundary(s.to_string())),
        }
    }
}

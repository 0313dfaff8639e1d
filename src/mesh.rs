use crate::hydro::{Conserved, Primitive};

// ============================================================================
#[derive(Clone, Debug)]

/**
 * A uniform one-dimensional finite-volume mesh and its per-cell conserved
 * state. Cells are indexed left to right, `0..num_cells`, and the center of
 * cell `i` lies at `x0 + (i + 0.5) dx`. Cells are never added or removed
 * after construction; the solver mutates the stored state in place, one
 * full sweep per time step.
 */
pub struct Grid {
    cells: Vec<Conserved>,
    x0: f64,
    x1: f64,
    dx: f64,
}

// ============================================================================
impl Grid {
    /**
     * Create a grid of `num_cells` zero-initialized cells spanning
     * `[x0, x1]`. Panics if `num_cells` is zero; the configuration layer
     * rejects non-positive cell counts before construction.
     */
    pub fn new(num_cells: usize, x0: f64, x1: f64) -> Self {
        assert!(num_cells >= 1, "grid must contain at least one cell");
        let dx = (x1 - x0) / num_cells as f64;
        Self {
            cells: vec![Conserved::default(); num_cells],
            x0,
            x1,
            dx,
        }
    }

    /**
     * Shock-tube setup: every cell whose center lies left of
     * `interface_pos` receives the conserved form of `left`, every other
     * cell that of `right`.
     */
    pub fn initialize(&mut self, left: Primitive, right: Primitive, interface_pos: f64, gamma_law_index: f64) {
        let ul = left.to_conserved(gamma_law_index);
        let ur = right.to_conserved(gamma_law_index);

        for i in 0..self.num_cells() {
            self.cells[i] = if self.cell_center(i) < interface_pos {
                ul
            } else {
                ur
            };
        }
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn spacing(&self) -> f64 {
        self.dx
    }

    pub fn start(&self) -> f64 {
        self.x0
    }

    pub fn end(&self) -> f64 {
        self.x1
    }

    pub fn cell_center(&self, i: usize) -> f64 {
        self.x0 + (i as f64 + 0.5) * self.dx
    }

    /// Stored conserved state, one entry per cell. Indexing out of range
    /// panics; index validity is the caller's precondition.
    pub fn cells(&self) -> &[Conserved] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Conserved] {
        &mut self.cells
    }

    /**
     * The primitive form of every stored cell. Recomputed from the
     * conserved state on each call (with the conversion floor re-applied),
     * never cached.
     */
    pub fn primitives(&self, gamma_law_index: f64) -> Vec<Primitive> {
        self.cells
            .iter()
            .map(|u| u.to_primitive(gamma_law_index))
            .collect()
    }
}

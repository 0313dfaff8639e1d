use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mesh::Grid;

// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]

/**
 * One row of a snapshot file: cell-center coordinate, primitive state, and
 * the stored total energy density.
 */
pub struct SnapshotRow {
    pub x: f64,
    pub rho: f64,
    pub u: f64,
    pub p: f64,
    pub energy: f64,
}

/**
 * Writes numbered CSV snapshots of the grid state into a fixed directory.
 * Files are named `snapshot_NNNNN.csv` with a zero-padded index that starts
 * at 0 and increases by one per emitted snapshot.
 */
pub struct SnapshotWriter {
    dir: PathBuf,
    index: usize,
}

// ============================================================================
impl SnapshotWriter {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            index: 0,
        }
    }

    /// Index the next emitted snapshot will carry.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /**
     * Write the current grid state as the next snapshot. Values are in
     * scientific notation with six digits after the point. The snapshot
     * index advances even if the write fails, so a skipped snapshot leaves
     * a gap rather than renumbering later ones.
     */
    pub fn write(&mut self, grid: &Grid, gamma_law_index: f64) -> Result<PathBuf, csv::Error> {
        let path = self.dir.join(format!("snapshot_{:05}.csv", self.index));
        self.index += 1;

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(&["x", "rho", "u", "p", "energy"])?;

        let prims = grid.primitives(gamma_law_index);
        for (i, prim) in prims.iter().enumerate() {
            writer.write_record(&[
                format!("{:.6e}", grid.cell_center(i)),
                format!("{:.6e}", prim.mass_density()),
                format!("{:.6e}", prim.velocity()),
                format!("{:.6e}", prim.gas_pressure()),
                format!("{:.6e}", grid.cells()[i].energy_density()),
            ])?;
        }
        writer.flush()?;
        Ok(path)
    }
}

/**
 * Read a snapshot file back into memory. Used by the validation tests and
 * by downstream tooling that compares runs.
 */
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<SnapshotRow>, csv::Error> {
    csv::Reader::from_path(path)?.deserialize().collect()
}

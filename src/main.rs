use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, info, LevelFilter};

use enzo_hll::config::Params;
use enzo_hll::driver;
use enzo_hll::mesh::Grid;
use enzo_hll::output::SnapshotWriter;

#[derive(Debug, Parser)]
#[clap(about = "1D compressible Euler solver with an HLL Riemann flux")]
struct Opts {
    /// Path to the parameter file
    param_file: Option<PathBuf>,
}

// ============================================================================
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| writeln!(buf, "[ENZO-HLL] {}", record.args()))
        .init();
}

fn main() {
    init_logger();

    let opts = Opts::parse();
    let param_file = match opts.param_file {
        Some(path) => path,
        None => {
            error!("usage: enzo-hll <parameter_file.enzo>");
            exit(1);
        }
    };

    info!("reading parameter file: {}", param_file.display());
    let params = match Params::from_file(&param_file) {
        Ok(params) => params,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&params.output_dir) {
        error!("could not create output directory {}: {}", params.output_dir, e);
        exit(1);
    }

    let mut grid = Grid::new(params.num_cells, params.x0, params.x1);
    grid.initialize(
        params.left,
        params.right,
        params.interface_position,
        params.gamma,
    );

    info!("grid initialized with {} cells", params.num_cells);
    info!("domain: [{}, {}]", params.x0, params.x1);

    let mut writer = SnapshotWriter::new(&params.output_dir);
    driver::run(&mut grid, &params, &mut writer);

    info!("success, exiting");
}

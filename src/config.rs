use std::error;
use std::fmt;
use std::fs;
use std::path::Path;

use log::warn;

use crate::boundary::BoundaryCondition;
use crate::hydro::Primitive;

// ============================================================================
#[derive(Debug, Clone, PartialEq)]

/**
 * Error raised for an unusable parameter file. A missing file is not an
 * error (the run falls back to defaults); a malformed value is, and no
 * simulation runs.
 */
pub enum Error {
    InvalidNumber { key: String, value: String },
    InvalidCellCount(i64),
    UnknownBoundary(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            InvalidNumber { key, value } => {
                write!(fmt, "invalid numeric value '{}' for key '{}'", value, key)
            }
            InvalidCellCount(n) => write!(fmt, "cell count must be positive, got {}", n),
            UnknownBoundary(s) => write!(fmt, "unknown boundary condition '{}'", s),
        }
    }
}

impl error::Error for Error {}

// ============================================================================
#[derive(Debug, Clone, PartialEq)]

/**
 * Run parameters, as read from a `key = value` parameter file. Defaults
 * describe the canonical Sod shock tube on the unit interval.
 */
pub struct Params {
    pub num_cells: usize,
    pub x0: f64,
    pub x1: f64,
    pub t_final: f64,
    pub cfl: f64,
    pub gamma: f64,
    pub output_dt: f64,
    pub output_dir: String,
    pub bc: BoundaryCondition,
    pub left: Primitive,
    pub right: Primitive,
    pub interface_position: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            num_cells: 100,
            x0: 0.0,
            x1: 1.0,
            t_final: 0.2,
            cfl: 0.8,
            gamma: 1.4,
            output_dt: 0.01,
            output_dir: "data/outputs".to_string(),
            bc: BoundaryCondition::Outflow,
            left: Primitive::new(1.0, 0.0, 1.0),
            right: Primitive::new(0.125, 0.0, 0.1),
            interface_position: 0.5,
        }
    }
}

// ============================================================================
impl Params {
    /**
     * Read parameters from a plain-text file of `key = value` lines. A `#`
     * starts a trailing comment; blank lines and unrecognized keys are
     * ignored. An unreadable file yields the defaults with a warning, a
     * malformed value is fatal.
     */
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => {
                warn!(
                    "could not open parameter file {}, using defaults",
                    path.as_ref().display()
                );
                return Ok(Self::default());
            }
        };
        Self::from_str_contents(&contents)
    }

    fn from_str_contents(contents: &str) -> Result<Self, Error> {
        let mut params = Self::default();

        for line in contents.lines() {
            let line = line.split('#').next().unwrap_or("");
            let mut split = line.splitn(2, '=');

            let (key, value) = match (split.next(), split.next()) {
                (Some(key), Some(value)) => (key.trim(), value.trim()),
                _ => continue,
            };

            match key {
                "nx" => {
                    let n = parse_number::<i64>(key, value)?;
                    if n <= 0 {
                        return Err(Error::InvalidCellCount(n));
                    }
                    params.num_cells = n as usize
                }
                "x0" => params.x0 = parse_number(key, value)?,
                "x1" => params.x1 = parse_number(key, value)?,
                "t_final" => params.t_final = parse_number(key, value)?,
                "cfl" => params.cfl = parse_number(key, value)?,
                "gamma" => params.gamma = parse_number(key, value)?,
                "output_dt" => params.output_dt = parse_number(key, value)?,
                "output_dir" => params.output_dir = value.to_string(),
                "bc_type" => params.bc = value.parse()?,
                "left_rho" => params.left.0 = parse_number(key, value)?,
                "left_u" => params.left.1 = parse_number(key, value)?,
                "left_p" => params.left.2 = parse_number(key, value)?,
                "right_rho" => params.right.0 = parse_number(key, value)?,
                "right_u" => params.right.1 = parse_number(key, value)?,
                "right_p" => params.right.2 = parse_number(key, value)?,
                "interface_position" => params.interface_position = parse_number(key, value)?,
                _ => {}
            }
        }
        Ok(params)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| Error::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

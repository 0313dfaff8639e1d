use std::ops::{Add, Div, Mul, Sub};

/// Density and pressure floor applied when recovering primitive variables.
/// Keeps the conversion finite on (transiently) non-physical conserved data;
/// the stored conserved state itself is never clamped.
pub const FLOOR: f64 = 1e-14;

// ============================================================================
#[derive(Clone, Copy, Debug, Default, PartialEq)]

/**
 * Conserved hydrodynamic state of one finite-volume cell: mass density,
 * momentum density, and total energy density. The same 3-vector also
 * represents an interface flux (mass, momentum, and energy fluxes).
 */
pub struct Conserved(pub f64, pub f64, pub f64);

#[derive(Clone, Copy, Debug, PartialEq)]

/**
 * Primitive hydrodynamic state: mass density, velocity, and gas pressure.
 * Derived from `Conserved` for physics evaluation and output; never the
 * persistently stored representation.
 */
pub struct Primitive(pub f64, pub f64, pub f64);

// ============================================================================
impl Conserved {
    pub fn new(rho: f64, mom: f64, energy: f64) -> Self {
        Self(rho, mom, energy)
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn momentum_density(&self) -> f64 {
        self.1
    }

    pub fn energy_density(&self) -> f64 {
        self.2
    }

    /**
     * Recover the primitive state, flooring density and pressure at
     * `FLOOR`. Infallible: degenerate states are clamped silently rather
     * than reported, which trades physical fidelity for robustness.
     */
    pub fn to_primitive(&self, gamma_law_index: f64) -> Primitive {
        let rho = self.mass_density().max(FLOOR);
        let u = self.momentum_density() / rho;
        let kinetic = 0.5 * rho * u * u;
        let internal = self.energy_density() - kinetic;
        let p = ((gamma_law_index - 1.0) * internal).max(FLOOR);
        Primitive(rho, u, p)
    }
}

// ============================================================================
impl Primitive {
    pub fn new(rho: f64, u: f64, p: f64) -> Self {
        Self(rho, u, p)
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn velocity(&self) -> f64 {
        self.1
    }

    pub fn gas_pressure(&self) -> f64 {
        self.2
    }

    pub fn sound_speed(&self, gamma_law_index: f64) -> f64 {
        let p = self.gas_pressure().max(FLOOR);
        let rho = self.mass_density().max(FLOOR);
        f64::sqrt(gamma_law_index * p / rho)
    }

    /// Fastest characteristic speed of this state, `|u| + a`.
    pub fn max_signal_speed(&self, gamma_law_index: f64) -> f64 {
        self.velocity().abs() + self.sound_speed(gamma_law_index)
    }

    pub fn to_conserved(&self, gamma_law_index: f64) -> Conserved {
        let d = self.mass_density();
        let u = self.velocity();
        let p = self.gas_pressure();
        Conserved(d, d * u, p / (gamma_law_index - 1.0) + 0.5 * d * u * u)
    }

    /**
     * Physical flux vector of this state: `(rho u, rho u^2 + p, u (E + p))`.
     */
    pub fn flux_vector(&self, gamma_law_index: f64) -> Conserved {
        let u = self.to_conserved(gamma_law_index);
        let vn = self.velocity();
        let pg = self.gas_pressure();
        Conserved(u.0, u.1 * vn + pg, vn * (u.2 + pg))
    }

    /// The same state with the velocity negated; mirrors a wall.
    pub fn reflect(&self) -> Primitive {
        Primitive(self.0, -self.1, self.2)
    }
}

// ============================================================================
impl Add<Conserved> for Conserved {
    type Output = Conserved;
    fn add(self, u: Self) -> Conserved {
        Conserved(self.0 + u.0, self.1 + u.1, self.2 + u.2)
    }
}

impl Sub<Conserved> for Conserved {
    type Output = Self;
    fn sub(self, u: Self) -> Self {
        Self(self.0 - u.0, self.1 - u.1, self.2 - u.2)
    }
}

impl Mul<f64> for Conserved {
    type Output = Self;
    fn mul(self, a: f64) -> Self {
        Self(self.0 * a, self.1 * a, self.2 * a)
    }
}

impl Div<f64> for Conserved {
    type Output = Self;
    fn div(self, a: f64) -> Self {
        Self(self.0 / a, self.1 / a, self.2 / a)
    }
}

// ============================================================================
/**
 * HLL approximate Riemann flux at the interface between a left and a right
 * primitive state. Signal-speed bounds use the Davis estimate. The two-wave
 * fan has no resolved contact, so the flux is more diffusive than exact or
 * HLLC solvers; that is a property of the scheme, not an error.
 */
pub fn riemann_hll(pl: Primitive, pr: Primitive, gamma_law_index: f64) -> Conserved {
    let al = pl.sound_speed(gamma_law_index);
    let ar = pr.sound_speed(gamma_law_index);

    let sl = f64::min(pl.velocity() - al, pr.velocity() - ar);
    let sr = f64::max(pl.velocity() + al, pr.velocity() + ar);

    let ul = pl.to_conserved(gamma_law_index);
    let ur = pr.to_conserved(gamma_law_index);
    let fl = pl.flux_vector(gamma_law_index);
    let fr = pr.flux_vector(gamma_law_index);

    if sl >= 0.0 {
        fl
    } else if sr <= 0.0 {
        fr
    } else {
        (fl * sr - fr * sl + (ur - ul) * (sl * sr)) / (sr - sl)
    }
}

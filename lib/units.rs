#![allow(non_upper_case_globals)]

//! Physical constants and conversion to and from naturalized units.
//!
//! The solver itself works in natural units (ħ = 1, mass folded into the
//! stencil coefficient); the constants here feed the closed-form
//! [characteristic energies][crate::potential::Potential::characteristic_energy]
//! and [`Units`] provides the scaling path back to a concrete base unit
//! system.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.8541878128e-12;
//              +/- 0.0000000013e-12

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// A pair of natural unit scaling factors relative to some base unit system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system. Compose with
/// [`Spectrum::rescale`][crate::hamiltonian::Spectrum::rescale] to express
/// solver output in base units.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Construct from a mass and length scale in atomic (Bohr radii/electron
    /// masses) units (AU).
    pub fn from_au(mass: f64, a: f64) -> Self {
        let m_si = me * mass;
        let a_si = a0 * a;
        let e_unit = hbar.powi(2) / 2.0 / m_si / a_si.powi(2) / Eh;
        Self { m: mass, a, e: e_unit }
    }

    /// Convert a quantity with dimensions of length in the base unit system to
    /// natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

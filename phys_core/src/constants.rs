//! Physical constants in SI units (CODATA 2018).
//!
//! No law substitutes these automatically; pass them as ordinary quantities.

/// Speed of light in vacuum (m/s), exact
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Molar gas constant (J/(mol·K)), exact
pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;

/// Coulomb constant k = 1/(4πε₀) (N·m²/C²)
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;

/// Standard gravity (m/s²), exact
pub const STANDARD_GRAVITY: f64 = 9.806_65;

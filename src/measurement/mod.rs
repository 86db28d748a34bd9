//! Measurement module
//!
//! Height and weight units and their conversion to canonical metric units.

pub mod converter;
pub mod units;

pub use converter::{to_kilograms, to_meters};
pub use units::{HeightUnit, WeightUnit, CM_PER_M, KG_PER_LB, M_PER_FT};

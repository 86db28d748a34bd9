//! BMI module
//!
//! Arithmetic and classification on canonical measurements.

pub mod calculator;
pub mod classifier;
pub mod result;

pub use calculator::{compute, round_to_hundredths, CalcError};
pub use classifier::{
    classify, tip_for, Category, Classification, Gender, ThresholdLadder, FEMALE_LADDER,
    MALE_LADDER,
};
pub use result::BmiResult;

//! BMI Tracker Library
//!
//! Body mass index calculation, classification, and a durable history ledger.

pub mod bmi;
pub mod build_info;
pub mod config;
pub mod db;
pub mod history;
pub mod mcp;
pub mod measurement;
pub mod models;
pub mod session;
pub mod tools;

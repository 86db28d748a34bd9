//! MCP module
//!
//! Stdio MCP server for the BMI tracker.

pub mod server;

pub use server::BmiService;

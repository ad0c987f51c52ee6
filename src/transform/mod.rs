//! Transformation module.
//!
//! This module handles the Scout to MS Annika conversion:
//! - Mapper: per-row column derivation
//! - Pipeline: parse, map and write orchestration

pub mod mapper;
pub mod pipeline;

pub use mapper::{map_records, REQUIRED_COLUMNS};
pub use pipeline::*;

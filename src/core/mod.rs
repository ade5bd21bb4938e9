//! Core module - pure transformations over in-memory data
//!
//! This module provides:
//! - The item and shop table data model
//! - Unit tables and the denomination selector
//! - Number formatting with magnitude suffixes
//! - Tag-based set-membership filters

pub mod model;
pub mod numfmt;
pub mod tags;
pub mod units;

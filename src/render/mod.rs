//! Render module - shop table output
//!
//! This module provides:
//! - The fixed-width box-drawing terminal renderer
//! - Flat-file writers (CSV, tab-delimited text, JSON, HTML)

pub mod table;
pub mod writers;

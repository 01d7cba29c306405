//! Utility modules.
//!
//! This module contains helper functions that are not tied to a single view.

pub mod price;

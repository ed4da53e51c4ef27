//! Theme Module
//!
//! Color constants and styling helpers for the light account-app look.

pub mod colors;
pub mod styles;

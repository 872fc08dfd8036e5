//! Curve model implementations.
//!
//! Components are small value types with pure evaluation functions so that the
//! pipeline, plotting and export code can stay generic.

pub mod clg;
pub mod gaussian;

pub use clg::*;
pub use gaussian::*;

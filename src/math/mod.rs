//! Mathematical utilities: gradients, half-max crossings, grids, and `erf`.

pub mod gradient;
pub mod grid;
pub mod half_max;
pub mod special;

pub use gradient::*;
pub use grid::*;
pub use half_max::*;
pub use special::*;

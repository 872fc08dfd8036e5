//! Input/output helpers.
//!
//! - IRM data ingest (`series`)
//! - unmixing parameter reports (`unmix`)
//! - parameter CSV export (`export`)
//! - curve JSON write (`curve`)

pub mod curve;
pub mod export;
pub mod series;
pub mod unmix;

pub use curve::*;
pub use export::*;
pub use series::*;
pub use unmix::*;

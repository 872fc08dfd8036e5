//! `clg-curves` library crate.
//!
//! The binary (`clg`) is a thin wrapper around this library so that:
//!
//! - parsing and numeric code is testable without spawning processes
//! - the core (series ingest, gradient, CLG model, parameter-file parser,
//!   half-max interpolation) is reusable by other front-ends

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

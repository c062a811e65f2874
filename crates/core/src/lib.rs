//! Domain logic for SkillForge.
//!
//! Everything in this crate is pure: no I/O, no clocks. Callers pass `now`
//! explicitly so results are reproducible in tests.

pub mod analytics;
pub mod category;
pub mod decay;
pub mod error;
pub mod forecast;
pub mod practice;
pub mod types;
pub mod validation;

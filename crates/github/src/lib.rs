//! GitHub skill detection for SkillForge.
//!
//! A [`SkillScanner`] turns a GitHub username into a [`ScanReport`] of
//! detected skills. [`HttpScanner`] talks to an external scraper function
//! over HTTP; the API crate decides what to persist.

pub mod http;
pub mod scanner;

pub use http::HttpScanner;
pub use scanner::{DetectedSkill, ScanError, ScanReport, SkillScanner};

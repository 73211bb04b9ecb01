//! # shalias-core
//!
//! Core library for the shalias CLI providing:
//! - The alias data model (aliases, groups, extensions) with
//!   construction-time validation
//! - The XML document loader that feeds alias collectors
//! - The collector contract shared by script builders and report
//!   generators

pub mod collector;
pub mod error;
pub mod loader;
pub mod model;

pub use collector::AliasCollector;
pub use error::{Error, Result};
pub use loader::AliasesProcessor;

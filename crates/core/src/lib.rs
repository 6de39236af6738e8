//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod quality;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use quality::{QUALITY_MAX, QUALITY_MIN, clamp_quality};
pub use value_object::ValueObject;

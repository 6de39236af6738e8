//! Inventory domain module.
//!
//! This crate contains the daily aging rules for shop items, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod item;
pub mod policy;
pub mod rule;
pub mod rule_book;
pub mod shop;

pub use category::Category;
pub use item::Item;
pub use policy::AgingPolicy;
pub use rule::{AgingRule, Condition, Effect};
pub use rule_book::{RuleBook, update_quality};
pub use shop::GildedRose;

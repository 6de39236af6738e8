//! Threshold rules keyed on an item's (post-decrement) sell-in.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Predicate on the sell-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// `sell_in < days`
    Below(i32),
    /// `sell_in >= days`
    AtLeast(i32),
}

impl Condition {
    pub fn holds(self, sell_in: i32) -> bool {
        match self {
            Condition::Below(days) => sell_in < days,
            Condition::AtLeast(days) => sell_in >= days,
        }
    }
}

/// What a matching rule does to the quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// `quality += delta`
    Adjust(i32),
    /// `quality = value`
    Set(i32),
}

impl Effect {
    /// Unclamped result of applying the effect.
    pub fn apply(self, quality: i32) -> i32 {
        match self {
            Effect::Adjust(delta) => quality.saturating_add(delta),
            Effect::Set(value) => value,
        }
    }
}

/// A single `(condition, effect)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgingRule {
    pub when: Condition,
    pub then: Effect,
}

impl ValueObject for AgingRule {}

impl AgingRule {
    pub fn new(when: Condition, then: Effect) -> Self {
        Self { when, then }
    }

    /// Adjust quality by `delta` while `sell_in < days`.
    pub fn adjust_below(days: i32, delta: i32) -> Self {
        Self::new(Condition::Below(days), Effect::Adjust(delta))
    }

    /// Adjust quality by `delta` while `sell_in >= days`.
    pub fn adjust_at_least(days: i32, delta: i32) -> Self {
        Self::new(Condition::AtLeast(days), Effect::Adjust(delta))
    }

    /// Set quality to `value` once `sell_in < days`.
    pub fn set_below(days: i32, value: i32) -> Self {
        Self::new(Condition::Below(days), Effect::Set(value))
    }

    pub fn matches(&self, sell_in: i32) -> bool {
        self.when.holds(sell_in)
    }
}

//! Per-category aging policy: a sell rate plus an ordered rule list.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject, clamp_quality};

use crate::category::Category;
use crate::item::Item;
use crate::rule::AgingRule;

/// How one category of item ages in a single day.
///
/// Each day:
/// - `sell_in` drops by `sell_rate`;
/// - the rules are evaluated in order against the *new* `sell_in`, and the
///   first match applies its effect and stops evaluation;
/// - if a rule matched, quality is clamped into the shared bounds.
///
/// Because the thresholds see the decremented value, an item with `sell_in == 0`
/// is already expired on the day it is aged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingPolicy {
    sell_rate: i32,
    #[serde(default)]
    rules: Vec<AgingRule>,
}

impl ValueObject for AgingPolicy {}

impl AgingPolicy {
    pub fn new(sell_rate: i32, rules: Vec<AgingRule>) -> DomainResult<Self> {
        let policy = Self { sell_rate, rules };
        policy.validate()?;
        Ok(policy)
    }

    /// Built-in behavior for a category.
    pub fn standard(category: Category) -> Self {
        let (sell_rate, rules) = match category {
            Category::AgedBrie => (
                1,
                vec![
                    AgingRule::adjust_below(0, 2),
                    AgingRule::adjust_at_least(0, 1),
                ],
            ),
            Category::Legendary => (0, Vec::new()),
            // Most restrictive threshold first.
            Category::BackstagePass => (
                1,
                vec![
                    AgingRule::set_below(0, 0),
                    AgingRule::adjust_below(5, 3),
                    AgingRule::adjust_below(10, 2),
                    AgingRule::adjust_at_least(10, 1),
                ],
            ),
            Category::Conjured => (
                1,
                vec![
                    AgingRule::adjust_below(0, -4),
                    AgingRule::adjust_at_least(0, -2),
                ],
            ),
            Category::Normal => (
                1,
                vec![
                    AgingRule::adjust_below(0, -2),
                    AgingRule::adjust_at_least(0, -1),
                ],
            ),
        };
        Self { sell_rate, rules }
    }

    pub fn sell_rate(&self) -> i32 {
        self.sell_rate
    }

    pub fn rules(&self) -> &[AgingRule] {
        &self.rules
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.sell_rate < 0 {
            return Err(DomainError::invalid_configuration(format!(
                "sell rate must be >= 0 (got {})",
                self.sell_rate
            )));
        }
        Ok(())
    }

    /// First rule matching `sell_in`, if any.
    pub fn rule_for(&self, sell_in: i32) -> Option<&AgingRule> {
        self.rules.iter().find(|rule| rule.matches(sell_in))
    }

    /// Age `item` by one day.
    ///
    /// On a configuration error the item is left untouched.
    pub fn age(&self, item: &mut Item) -> DomainResult<()> {
        self.validate()?;
        self.age_validated(item);
        Ok(())
    }

    /// Aging step for a policy that has already passed `validate`.
    pub(crate) fn age_validated(&self, item: &mut Item) {
        let sell_in = item.sell_in().saturating_sub(self.sell_rate);
        item.set_sell_in(sell_in);

        if let Some(rule) = self.rule_for(sell_in) {
            item.set_quality(clamp_quality(rule.then.apply(item.quality())));
        }
    }
}

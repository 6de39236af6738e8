//! Inventory updater: one aging policy per category, applied once per day.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainResult;

use crate::category::Category;
use crate::item::Item;
use crate::policy::AgingPolicy;

static STANDARD: LazyLock<RuleBook> = LazyLock::new(RuleBook::standard);

/// Complete rule set: an [`AgingPolicy`] for every [`Category`].
///
/// Categories missing from a deserialized rule book keep their standard policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleBook {
    aged_brie: AgingPolicy,
    legendary: AgingPolicy,
    backstage_pass: AgingPolicy,
    conjured: AgingPolicy,
    normal: AgingPolicy,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleBook {
    pub fn standard() -> Self {
        Self {
            aged_brie: AgingPolicy::standard(Category::AgedBrie),
            legendary: AgingPolicy::standard(Category::Legendary),
            backstage_pass: AgingPolicy::standard(Category::BackstagePass),
            conjured: AgingPolicy::standard(Category::Conjured),
            normal: AgingPolicy::standard(Category::Normal),
        }
    }

    /// Replace the policy for one category.
    pub fn with_policy(mut self, category: Category, policy: AgingPolicy) -> Self {
        *self.policy_mut(category) = policy;
        self
    }

    pub fn policy(&self, category: Category) -> &AgingPolicy {
        match category {
            Category::AgedBrie => &self.aged_brie,
            Category::Legendary => &self.legendary,
            Category::BackstagePass => &self.backstage_pass,
            Category::Conjured => &self.conjured,
            Category::Normal => &self.normal,
        }
    }

    fn policy_mut(&mut self, category: Category) -> &mut AgingPolicy {
        match category {
            Category::AgedBrie => &mut self.aged_brie,
            Category::Legendary => &mut self.legendary,
            Category::BackstagePass => &mut self.backstage_pass,
            Category::Conjured => &mut self.conjured,
            Category::Normal => &mut self.normal,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        for category in Category::ALL {
            self.policy(category).validate()?;
        }
        Ok(())
    }

    /// Advance every item by one day, in collection order.
    ///
    /// The whole rule book is validated before the first item is touched, so a
    /// configuration error never leaves the collection partially aged.
    pub fn update_quality(&self, items: &mut [Item]) -> DomainResult<()> {
        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "rule book rejected; inventory left unchanged");
            return Err(err);
        }
        self.age_all(items);
        Ok(())
    }

    fn age_all(&self, items: &mut [Item]) {
        tracing::debug!(items = items.len(), "advancing inventory by one day");
        for item in items.iter_mut() {
            let category = item.category();
            self.policy(category).age_validated(item);
            tracing::trace!(
                name = item.name(),
                %category,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }
    }
}

/// Advance every item by one day using the standard rule book.
pub fn update_quality(items: &mut [Item]) {
    STANDARD.age_all(items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::AgingRule;
    use gildedrose_core::{DomainError, QUALITY_MAX, QUALITY_MIN};

    const BACKSTAGE: &str = "Backstage passes to a TAFKAL80ETC concert";
    const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

    fn one_day(name: &str, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut items = vec![Item::new(name, sell_in, quality)];
        update_quality(&mut items);
        (items[0].sell_in(), items[0].quality())
    }

    #[test]
    fn normal_item_loses_one_quality_per_day() {
        assert_eq!(one_day("Foo", 10, 20), (9, 19));
        assert_eq!(one_day("Foo", 1, 10), (0, 9));
    }

    #[test]
    fn normal_item_degrades_twice_as_fast_once_expired() {
        assert_eq!(one_day("Foo", 0, 10), (-1, 8));
        assert_eq!(one_day("Foo", -5, 10), (-6, 8));
    }

    #[test]
    fn aged_brie_gains_quality() {
        assert_eq!(one_day("Aged Brie", 2, 0), (1, 1));
        assert_eq!(one_day("Aged Brie", 1, 0), (0, 1));
        assert_eq!(one_day("Aged Brie", 0, 0), (-1, 2));
    }

    #[test]
    fn quality_never_exceeds_upper_bound() {
        assert_eq!(one_day("Aged Brie", 0, 49), (-1, 50));
        assert_eq!(one_day("Aged Brie", 5, 50), (4, 50));
        assert_eq!(one_day(BACKSTAGE, 5, 49), (4, 50));
    }

    #[test]
    fn quality_never_goes_negative() {
        assert_eq!(one_day("Foo", 1, 0), (0, 0));
        assert_eq!(one_day("Conjured Mana Cake", -1, 3), (-2, 0));
    }

    #[test]
    fn legendary_item_never_changes() {
        assert_eq!(one_day(SULFURAS, 0, 80), (0, 80));
        assert_eq!(one_day(SULFURAS, 1, 80), (1, 80));
        assert_eq!(one_day(SULFURAS, -1, 80), (-1, 80));
    }

    #[test]
    fn backstage_pass_gains_by_tier_then_drops_to_zero() {
        assert_eq!(one_day(BACKSTAGE, 11, 20), (10, 21));
        assert_eq!(one_day(BACKSTAGE, 10, 20), (9, 22));
        assert_eq!(one_day(BACKSTAGE, 6, 20), (5, 22));
        assert_eq!(one_day(BACKSTAGE, 5, 20), (4, 23));
        assert_eq!(one_day(BACKSTAGE, 1, 20), (0, 23));
        assert_eq!(one_day(BACKSTAGE, 0, 20), (-1, 0));
    }

    #[test]
    fn conjured_item_degrades_twice_as_fast_as_normal() {
        assert_eq!(one_day("Conjured Mana Cake", 3, 6), (2, 4));
        assert_eq!(one_day("Conjured Mana Cake", 0, 10), (-1, 6));
    }

    #[test]
    fn items_are_updated_independently_in_order() {
        let mut items = vec![
            Item::new("Foo", 1, 0),
            Item::new("Aged Brie", 0, 49),
            Item::new("Aged Brie", 0, 49),
        ];
        update_quality(&mut items);

        assert_eq!(items[0].quality(), 0);
        assert_eq!(items[1].quality(), 50);
        assert_eq!(items[2].quality(), 50);
        assert_eq!(items[0].name(), "Foo");
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let mut items: Vec<Item> = Vec::new();
        update_quality(&mut items);
        assert!(items.is_empty());

        RuleBook::standard().update_quality(&mut items).unwrap();
    }

    #[test]
    fn custom_policy_overrides_one_category() {
        let book = RuleBook::standard().with_policy(
            Category::Conjured,
            AgingPolicy::new(1, vec![AgingRule::adjust_at_least(i32::MIN, -3)]).unwrap(),
        );
        let mut items = vec![
            Item::new("Conjured Mana Cake", 3, 6),
            Item::new("Foo", 3, 6),
        ];
        book.update_quality(&mut items).unwrap();

        assert_eq!((items[0].sell_in(), items[0].quality()), (2, 3));
        assert_eq!((items[1].sell_in(), items[1].quality()), (2, 5));
    }

    #[test]
    fn invalid_rule_book_fails_before_any_item_is_mutated() {
        let book: RuleBook =
            serde_json::from_str(r#"{ "legendary": { "sell_rate": -1 } }"#).unwrap();
        let original = vec![
            Item::new("Foo", 10, 20),
            Item::new(SULFURAS, 0, 80),
            Item::new("Aged Brie", 2, 0),
        ];
        let mut items = original.clone();

        let err = book.update_quality(&mut items).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_configuration("sell rate must be >= 0 (got -1)")
        );
        assert_eq!(items, original);
    }

    #[test]
    fn partial_rule_book_keeps_standard_policies() {
        let book: RuleBook = serde_json::from_str(
            r#"{
                "normal": {
                    "sell_rate": 1,
                    "rules": [ { "when": { "at_least": -1000000 }, "then": { "adjust": -5 } } ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            book.policy(Category::AgedBrie),
            &AgingPolicy::standard(Category::AgedBrie)
        );
        assert_eq!(book.policy(Category::Normal).rules().len(), 1);
        book.validate().unwrap();
    }

    #[test]
    fn standard_book_is_valid_and_round_trips_through_json() {
        let book = RuleBook::standard();
        book.validate().unwrap();

        let json = serde_json::to_string(&book).unwrap();
        let back: RuleBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_name() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("Aged Brie".to_string()),
                Just(BACKSTAGE.to_string()),
                Just("Conjured Mana Cake".to_string()),
                Just("+5 Dexterity Vest".to_string()),
                "[A-Za-z][A-Za-z0-9 ]{0,30}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: non-legendary quality stays inside the bounds once it has been aged.
            #[test]
            fn quality_stays_bounded(
                name in any_name(),
                sell_in in -30i32..30,
                quality in QUALITY_MIN..=QUALITY_MAX,
                days in 1usize..60,
            ) {
                prop_assume!(Category::of(&name) != Category::Legendary);
                let mut items = vec![Item::new(name, sell_in, quality)];
                for _ in 0..days {
                    update_quality(&mut items);
                    prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&items[0].quality()));
                }
            }

            /// Property: sell-in drops by exactly one per day for non-legendary items.
            #[test]
            fn sell_in_drops_by_one_per_day(
                name in any_name(),
                sell_in in -1000i32..1000,
                quality in QUALITY_MIN..=QUALITY_MAX,
                days in 1i32..60,
            ) {
                prop_assume!(Category::of(&name) != Category::Legendary);
                let mut items = vec![Item::new(name, sell_in, quality)];
                for _ in 0..days {
                    update_quality(&mut items);
                }
                prop_assert_eq!(items[0].sell_in(), sell_in - days);
            }

            /// Property: legendary items are identical before and after any number of days.
            #[test]
            fn legendary_items_are_static(
                sell_in in any::<i32>(),
                quality in any::<i32>(),
                days in 1usize..60,
            ) {
                let original = Item::new(SULFURAS, sell_in, quality);
                let mut items = vec![original.clone()];
                for _ in 0..days {
                    update_quality(&mut items);
                }
                prop_assert_eq!(&items[0], &original);
            }

            /// Property: the standard free function and the standard rule book agree.
            #[test]
            fn rule_book_matches_free_function(
                name in any_name(),
                sell_in in -30i32..30,
                quality in -10i32..80,
            ) {
                let mut via_fn = vec![Item::new(name.clone(), sell_in, quality)];
                let mut via_book = via_fn.clone();
                update_quality(&mut via_fn);
                RuleBook::standard().update_quality(&mut via_book).unwrap();
                prop_assert_eq!(via_fn, via_book);
            }
        }
    }
}

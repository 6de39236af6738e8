//! The shop: an owned item collection plus the rule book that ages it.

use gildedrose_core::DomainResult;

use crate::item::Item;
use crate::rule_book::RuleBook;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    rules: RuleBook,
}

impl GildedRose {
    /// Shop using the standard rule book.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            rules: RuleBook::standard(),
        }
    }

    /// Shop using a custom rule book; rejected up front if the book is invalid.
    pub fn with_rule_book(items: Vec<Item>, rules: RuleBook) -> DomainResult<Self> {
        rules.validate()?;
        Ok(Self { items, rules })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.rules
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) -> DomainResult<()> {
        self.rules.update_quality(&mut self.items)
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Entity: a shop item aging one day at a time.
///
/// The name is fixed at construction; only `sell_in` and `quality` move, and
/// only through an [`AgingPolicy`](crate::AgingPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left to sell the item; negative once the sell-by date has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Category derived from the name (re-evaluated on every call).
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    pub(crate) fn set_sell_in(&mut self, sell_in: i32) {
        self.sell_in = sell_in;
    }

    pub(crate) fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

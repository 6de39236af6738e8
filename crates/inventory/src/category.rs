//! Item categories, each with its own aging behavior.

/// Closed set of item categories.
///
/// Derived from the item name by prefix; the first matching prefix wins and
/// anything unmatched is [`Category::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AgedBrie,
    Legendary,
    BackstagePass,
    Conjured,
    Normal,
}

impl Category {
    /// All categories, in prefix-matching order.
    pub const ALL: [Category; 5] = [
        Category::AgedBrie,
        Category::Legendary,
        Category::BackstagePass,
        Category::Conjured,
        Category::Normal,
    ];

    /// Name prefix identifying the category (`None` for the default category).
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Category::AgedBrie => Some("Aged Brie"),
            Category::Legendary => Some("Sulfuras"),
            Category::BackstagePass => Some("Backstage passes"),
            Category::Conjured => Some("Conjured"),
            Category::Normal => None,
        }
    }

    pub fn of(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| {
                category
                    .prefix()
                    .is_some_and(|prefix| name.starts_with(prefix))
            })
            .unwrap_or(Category::Normal)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        };
        f.write_str(s)
    }
}

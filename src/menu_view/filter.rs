use crate::domain::{MenuCategory, MenuItem};

/// Category and search selection of the menu screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: MenuCategory,
    pub search_query: String,
}

impl MenuFilter {
    #[allow(dead_code)]
    pub fn new(category: MenuCategory, search_query: impl Into<String>) -> Self {
        Self {
            category,
            search_query: search_query.into(),
        }
    }

    /// A blank query (empty or whitespace only) matches every title.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.matches(&item.category)
            && (self.search_query.trim().is_empty()
                || item.title.to_lowercase().contains(&self.search_query.to_lowercase()))
    }

    /// Items that pass the filter, in storage order.
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

use std::fmt;

use crate::content::Category;

/// Anything that can be listed under a project category.
pub trait Categorized {
    fn category(&self) -> Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(Category),
}

impl Selection {
    /// Filter buttons in display order.
    pub fn options() -> [Selection; 4] {
        [
            Selection::All,
            Selection::Only(Category::FullStack),
            Selection::Only(Category::Frontend),
            Selection::Only(Category::Backend),
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Selection::All => "All",
            Selection::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(c) => c == category,
        }
    }
}

impl From<Category> for Selection {
    fn from(value: Category) -> Self {
        Selection::Only(value)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection for one project gallery.
///
/// Holds no items itself; the visible list is derived from whatever slice is
/// passed to [`CategoryFilter::visible`], so it can never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilter {
    selected: Selection,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects unconditionally; a category with no items simply shows nothing.
    pub fn select(&mut self, selection: impl Into<Selection>) {
        self.selected = selection.into();
    }

    pub fn selected(&self) -> Selection {
        self.selected
    }

    pub fn is_selected(&self, selection: Selection) -> bool {
        self.selected == selection
    }

    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> impl Iterator<Item = &'a T> {
        let selected = self.selected;
        items
            .iter()
            .filter(move |item| selected.matches(item.category()))
    }
}

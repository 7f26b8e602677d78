use serde::{Deserialize, Serialize};

use crate::shared::constants::{FALLBACK_CATEGORY_COLOR, FALLBACK_CATEGORY_ICON};

/// Static classification label with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    pub fn style(&self) -> CategoryStyle {
        CategoryStyle {
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }
}

/// Icon and color used to render a report's category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub icon: String,
    pub color: String,
}

impl CategoryStyle {
    pub fn fallback() -> Self {
        Self {
            icon: FALLBACK_CATEGORY_ICON.to_string(),
            color: FALLBACK_CATEGORY_COLOR.to_string(),
        }
    }

    /// Style of the category called `name`, or the fallback when none matches
    pub fn lookup(categories: &[Category], name: &str) -> Self {
        categories
            .iter()
            .find(|c| c.name == name)
            .map(Category::style)
            .unwrap_or_else(Self::fallback)
    }
}

/// Partial update for a category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl UpdateCategory {
    pub(crate) fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(icon) = self.icon {
            category.icon = icon;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
    }
}

//! Category Model
//!
//! Product rows carry free-text category tags; this enum is the
//! presentation-side resolution of those tags. Unknown tags map to
//! [`Category::Other`] instead of falling through.

use serde::{Deserialize, Serialize};

/// Known category identifiers, plus the "all" pseudo-category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Keyboard,
    Mouse,
    Audio,
    Speaker,
    Monitor,
    Accessory,
    Other,
}

/// Icon shown next to a category in navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Grid,
    Keyboard,
    Mouse,
    Headphones,
    Speaker,
    Camera,
    Cable,
}

/// Explicit tag -> (category, display name, icon) lookup table
const CATEGORY_TABLE: &[(&str, Category, &str, CategoryIcon)] = &[
    ("all", Category::All, "All Products", CategoryIcon::Grid),
    ("keyboard", Category::Keyboard, "Keyboards", CategoryIcon::Keyboard),
    ("mouse", Category::Mouse, "Mouse", CategoryIcon::Mouse),
    ("audio", Category::Audio, "Audio", CategoryIcon::Headphones),
    ("speaker", Category::Speaker, "Speakers", CategoryIcon::Speaker),
    ("monitor", Category::Monitor, "Monitors", CategoryIcon::Camera),
    ("accessory", Category::Accessory, "Accessories", CategoryIcon::Cable),
];

impl Category {
    /// Resolve a free-text product tag; unknown tags become `Other`
    pub fn from_tag(tag: &str) -> Category {
        let lower = tag.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(t, ..)| *t == lower)
            .map(|(_, c, ..)| *c)
            .unwrap_or(Category::Other)
    }

    pub fn tag(&self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(_, c, ..)| c == self)
            .map(|(t, ..)| *t)
            .unwrap_or("other")
    }

    pub fn display_name(&self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(_, c, ..)| c == self)
            .map(|(.., n, _)| *n)
            .unwrap_or("Other")
    }

    pub fn icon(&self) -> CategoryIcon {
        CATEGORY_TABLE
            .iter()
            .find(|(_, c, ..)| c == self)
            .map(|(.., i)| *i)
            .unwrap_or(CategoryIcon::Grid)
    }

    /// Navigation entries in display order (`all` first)
    pub fn navigation() -> impl Iterator<Item = Category> {
        CATEGORY_TABLE.iter().map(|(_, c, ..)| *c)
    }
}

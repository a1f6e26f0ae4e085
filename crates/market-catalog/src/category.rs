//! Category registry.

use market_core::Language;
use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;
use crate::text::LocalizedText;

/// Display configuration for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category identifier, as referenced by listings.
    pub id: CategoryId,
    /// URL segment used in SEO listing paths.
    pub slug: String,
    /// Localized display name.
    pub name: LocalizedText,
}

impl CategoryConfig {
    /// Create a category with a bilingual name.
    pub fn new(id: &str, slug: &str, ru: &str, kk: &str) -> Self {
        Self {
            id: CategoryId::new(id),
            slug: slug.to_string(),
            name: LocalizedText::bilingual(ru, kk),
        }
    }

    /// Display name in `language`, falling back to the category id.
    pub fn label(&self, language: Language) -> &str {
        match self.name.try_get(language) {
            Some(name) if !name.is_empty() => name,
            _ => self.id.as_str(),
        }
    }
}

/// Lookup table from category id to its configuration.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<CategoryConfig>,
}

/// (id, slug, ru, kk)
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("transport", "transport", "Транспорт", "Көлік"),
    ("real-estate", "nedvizhimost", "Недвижимость", "Жылжымайтын мүлік"),
    ("electronics", "electronics", "Электроника", "Электроника"),
    ("home", "dom-i-sad", "Дом и сад", "Үй және бақша"),
    ("jobs", "rabota", "Работа", "Жұмыс"),
    ("services", "uslugi", "Услуги", "Қызметтер"),
    ("kids", "detskiy-mir", "Детский мир", "Балалар әлемі"),
    ("fashion", "moda-i-stil", "Мода и стиль", "Сән және стиль"),
    ("animals", "zhivotnye", "Животные", "Жануарлар"),
    ("hobby", "hobbi-i-otdyh", "Хобби и отдых", "Хобби және демалыс"),
];

impl CategoryRegistry {
    /// Create a registry from explicit entries.
    pub fn new(categories: Vec<CategoryConfig>) -> Self {
        Self { categories }
    }

    /// The marketplace's built-in categories.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(id, slug, ru, kk)| CategoryConfig::new(id, slug, ru, kk))
                .collect(),
        )
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a category by its URL slug.
    pub fn by_slug(&self, slug: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// URL slug for a category id; unregistered ids are their own slug.
    pub fn slug_for<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.get(id).map(|c| c.slug.as_str()).unwrap_or(id.as_str())
    }

    /// All registered categories.
    pub fn all(&self) -> &[CategoryConfig] {
        &self.categories
    }
}

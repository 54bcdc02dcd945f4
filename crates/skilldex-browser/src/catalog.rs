//! The loaded catalog and its views

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use skilldex_index::{Category, Index, Skill, Subcategory};

use crate::error::Result;

/// A loaded, effectively-immutable skills catalog
///
/// Wraps the index artifact after its one startup load. All views borrow
/// from the index; there is no refetch and no mutation.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: Index,
}

/// Aggregate statistics for the landing view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOverview {
    /// Total skills across the catalog
    pub total_skills: usize,

    /// Number of categories
    pub category_count: usize,

    /// Category tiles in index order (descending by skill count)
    pub tiles: Vec<CategoryTile>,

    /// When the underlying index was generated
    pub generated_at: DateTime<Utc>,
}

/// One category tile on the landing view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    /// Category slug
    pub slug: String,

    /// Display name
    pub name: String,

    /// Display glyph
    pub icon: String,

    /// Direct plus subcategory skills
    pub skill_count: usize,
}

/// A skill flattened out of the hierarchy, with its display context
///
/// `context` is the category name, or "Category / Subcategory" for nested
/// skills.
#[derive(Debug, Clone)]
pub struct SkillEntry<'a> {
    /// The skill itself
    pub skill: &'a Skill,

    /// Category (and subcategory) display context
    pub context: String,

    /// Glyph of the owning category
    pub icon: &'a str,
}

impl Catalog {
    /// Load the index artifact from disk
    ///
    /// This is the browser's single data dependency. On failure the caller
    /// logs and presents its loading state; there is no retry here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let index: Index = serde_json::from_str(&raw)?;
        tracing::debug!(
            skills = index.total_skills,
            categories = index.categories.len(),
            "loaded skills index"
        );
        Ok(Self { index })
    }

    /// Wrap an already-deserialized index
    #[must_use]
    pub fn from_index(index: Index) -> Self {
        Self { index }
    }

    /// The underlying index
    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Landing view: aggregate statistics and category tiles
    #[must_use]
    pub fn overview(&self) -> CatalogOverview {
        CatalogOverview {
            total_skills: self.index.total_skills,
            category_count: self.index.categories.len(),
            tiles: self
                .index
                .categories
                .iter()
                .map(|c| CategoryTile {
                    slug: c.slug.clone(),
                    name: c.name.clone(),
                    icon: c.icon.clone(),
                    skill_count: c.skill_count,
                })
                .collect(),
            generated_at: self.index.generated_at,
        }
    }

    /// All categories in index order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.index.categories
    }

    /// A category listing view by slug
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.index.categories.iter().find(|c| c.slug == slug)
    }

    /// A subcategory listing view by category and subcategory slug
    #[must_use]
    pub fn subcategory(&self, slug: &str, sub_slug: &str) -> Option<&Subcategory> {
        self.category(slug)?
            .subcategories
            .iter()
            .find(|sc| sc.slug == sub_slug)
    }

    /// Every skill in the catalog, flattened with display context
    ///
    /// Direct skills come before subcategory skills within each category,
    /// mirroring the hierarchy order.
    #[must_use]
    pub fn all_skills(&self) -> Vec<SkillEntry<'_>> {
        let mut entries = Vec::with_capacity(self.index.total_skills);
        for category in &self.index.categories {
            for skill in &category.skills {
                entries.push(SkillEntry {
                    skill,
                    context: category.name.clone(),
                    icon: &category.icon,
                });
            }
            for sub in &category.subcategories {
                for skill in &sub.skills {
                    entries.push(SkillEntry {
                        skill,
                        context: format!("{} / {}", category.name, sub.name),
                        icon: &category.icon,
                    });
                }
            }
        }
        entries
    }

    /// Single-skill detail view, keyed by the skill's unique path
    ///
    /// The markdown body is carried through losslessly; rendering it is the
    /// caller's concern.
    #[must_use]
    pub fn skill(&self, path: &str) -> Option<SkillEntry<'_>> {
        self.all_skills().into_iter().find(|e| e.skill.path == path)
    }
}

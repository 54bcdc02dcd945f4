//! Index artifact types and the hierarchy accumulator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{Classification, title_case};
use crate::document::Skill;
use crate::icons::IconMap;

/// A subcategory and its skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    /// Subcategory slug (second path segment)
    pub slug: String,

    /// Title-cased display name
    pub name: String,

    /// Skills in this subcategory
    pub skills: Vec<Skill>,
}

/// A top-level category, its subcategories and direct skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category slug (first path segment)
    pub slug: String,

    /// Title-cased display name
    pub name: String,

    /// Display glyph
    pub icon: String,

    /// Subcategories, sorted alphabetically by name
    pub subcategories: Vec<Subcategory>,

    /// Skills directly under the category (no subcategory)
    pub skills: Vec<Skill>,

    /// Direct skills plus all subcategory skills
    pub skill_count: usize,
}

/// The aggregated index artifact
///
/// Regenerated wholesale on every build; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// Categories sorted descending by skill count, ties in discovery order
    pub categories: Vec<Category>,

    /// Total number of skills across the catalog
    pub total_skills: usize,

    /// When this index was generated
    pub generated_at: DateTime<Utc>,
}

impl Index {
    /// Check the count invariants
    ///
    /// Every category's `skill_count` must equal its direct skills plus the
    /// sum of its subcategory skills, and `total_skills` must be the sum of
    /// all category counts.
    #[must_use]
    pub fn validate(&self) -> bool {
        let mut total = 0;
        for category in &self.categories {
            let expected = category.skills.len()
                + category
                    .subcategories
                    .iter()
                    .map(|sc| sc.skills.len())
                    .sum::<usize>();
            if category.skill_count != expected {
                return false;
            }
            total += expected;
        }
        total == self.total_skills
    }
}

/// Insertion-ordered accumulator for the category hierarchy
///
/// Keyed by (category, subcategory) pairs. Categories and subcategories keep
/// the order in which they were first seen; [`IndexAccumulator::finish`]
/// applies the output ordering rules. A skill whose `path` is already
/// present replaces the earlier entry in place.
#[derive(Debug)]
pub struct IndexAccumulator {
    icons: IconMap,
    categories: Vec<Category>,
}

impl IndexAccumulator {
    /// Create an accumulator with the given icon configuration
    #[must_use]
    pub fn new(icons: IconMap) -> Self {
        Self {
            icons,
            categories: Vec::new(),
        }
    }

    /// Add a classified skill to the hierarchy
    pub fn insert(&mut self, classification: &Classification, skill: Skill) {
        let category = self.category_entry(&classification.category);

        let bucket = match &classification.subcategory {
            Some(sub_slug) => {
                let position = category
                    .subcategories
                    .iter()
                    .position(|sc| sc.slug == *sub_slug);
                let idx = position.unwrap_or_else(|| {
                    category.subcategories.push(Subcategory {
                        slug: sub_slug.clone(),
                        name: title_case(sub_slug),
                        skills: Vec::new(),
                    });
                    category.subcategories.len() - 1
                });
                &mut category.subcategories[idx].skills
            }
            None => &mut category.skills,
        };

        // Unique key is the path: a later document with the same path
        // replaces the earlier one in place.
        match bucket.iter().position(|s| s.path == skill.path) {
            Some(i) => bucket[i] = skill,
            None => bucket.push(skill),
        }
    }

    /// Seal the hierarchy into an [`Index`]
    ///
    /// Computes per-category counts, sorts subcategories alphabetically by
    /// name and categories descending by count (stable, so ties keep
    /// discovery order), and stamps the generation time.
    #[must_use]
    pub fn finish(mut self) -> Index {
        let mut total_skills = 0;
        for category in &mut self.categories {
            category
                .subcategories
                .sort_by(|a, b| a.name.cmp(&b.name));
            category.skill_count = category.skills.len()
                + category
                    .subcategories
                    .iter()
                    .map(|sc| sc.skills.len())
                    .sum::<usize>();
            total_skills += category.skill_count;
        }

        self.categories
            .sort_by(|a, b| b.skill_count.cmp(&a.skill_count));

        Index {
            categories: self.categories,
            total_skills,
            generated_at: Utc::now(),
        }
    }

    fn category_entry(&mut self, slug: &str) -> &mut Category {
        let position = self.categories.iter().position(|c| c.slug == slug);
        let idx = position.unwrap_or_else(|| {
            self.categories.push(Category {
                slug: slug.to_string(),
                name: title_case(slug),
                icon: self.icons.get(slug).to_string(),
                subcategories: Vec::new(),
                skills: Vec::new(),
                skill_count: 0,
            });
            self.categories.len() - 1
        });
        &mut self.categories[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::document::SkillHeader;

    fn skill_at(path: &str) -> (Classification, Skill) {
        let classification = classify(path).unwrap();
        let skill = Skill::from_header(SkillHeader::default(), &classification.skill, path, "");
        (classification, skill)
    }

    fn accumulate(paths: &[&str]) -> Index {
        let mut acc = IndexAccumulator::new(IconMap::default());
        for path in paths {
            let (classification, skill) = skill_at(path);
            acc.insert(&classification, skill);
        }
        acc.finish()
    }

    #[test]
    fn test_direct_and_nested_skills() {
        let index = accumulate(&["tools/alpha", "tools/beta/gamma"]);

        assert_eq!(index.categories.len(), 1);
        let cat = &index.categories[0];
        assert_eq!(cat.slug, "tools");
        assert_eq!(cat.name, "Tools");
        assert_eq!(cat.skills.len(), 1);
        assert_eq!(cat.skills[0].slug, "alpha");
        assert_eq!(cat.subcategories.len(), 1);
        assert_eq!(cat.subcategories[0].slug, "beta");
        assert_eq!(cat.subcategories[0].skills[0].slug, "gamma");
        assert_eq!(cat.skill_count, 2);
        assert_eq!(index.total_skills, 2);
        assert!(index.validate());
    }

    #[test]
    fn test_categories_sorted_by_count_descending() {
        let index = accumulate(&["small/one", "big/a", "big/b", "big/c"]);

        assert_eq!(index.categories[0].slug, "big");
        assert_eq!(index.categories[0].skill_count, 3);
        assert_eq!(index.categories[1].slug, "small");
    }

    #[test]
    fn test_category_ties_keep_discovery_order() {
        let index = accumulate(&["zeta/one", "alpha/one"]);

        // Equal counts: first-seen category stays first
        assert_eq!(index.categories[0].slug, "zeta");
        assert_eq!(index.categories[1].slug, "alpha");
    }

    #[test]
    fn test_subcategories_sorted_alphabetically() {
        let index = accumulate(&["cat/zulu/one", "cat/alpha/two", "cat/mike/three"]);

        let names: Vec<&str> = index.categories[0]
            .subcategories
            .iter()
            .map(|sc| sc.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Mike", "Zulu"]);
    }

    #[test]
    fn test_duplicate_path_last_write_wins_in_place() {
        let mut acc = IndexAccumulator::new(IconMap::default());

        let (classification, first) = skill_at("tools/alpha");
        acc.insert(&classification, first);

        let (_, other) = skill_at("tools/beta");
        acc.insert(&classify("tools/beta").unwrap(), other);

        let header = SkillHeader {
            name: Some("Replacement".to_string()),
            ..SkillHeader::default()
        };
        let replacement = Skill::from_header(header, "alpha", "tools/alpha", "");
        acc.insert(&classification, replacement);

        let index = acc.finish();
        let cat = &index.categories[0];

        // Exactly one skill per path, position preserved, content replaced
        assert_eq!(cat.skills.len(), 2);
        assert_eq!(cat.skills[0].path, "tools/alpha");
        assert_eq!(cat.skills[0].name, "Replacement");
        assert_eq!(index.total_skills, 2);
        assert!(index.validate());
    }

    #[test]
    fn test_icon_lookup_with_fallback() {
        let index = accumulate(&["github/github", "unmapped-topic/thing"]);

        let by_slug = |slug: &str| {
            index
                .categories
                .iter()
                .find(|c| c.slug == slug)
                .unwrap()
                .icon
                .clone()
        };
        assert_eq!(by_slug("github"), "\u{1f419}");
        assert_eq!(by_slug("unmapped-topic"), crate::icons::FALLBACK_ICON);
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        let mut index = accumulate(&["tools/alpha"]);
        index.categories[0].skill_count = 7;
        assert!(!index.validate());
    }

    #[test]
    fn test_wire_shape() {
        let index = accumulate(&["tools/alpha"]);
        let json = serde_json::to_value(&index).unwrap();

        assert!(json.get("totalSkills").is_some());
        assert!(json.get("generatedAt").is_some());
        assert!(json["categories"][0].get("skillCount").is_some());
    }
}

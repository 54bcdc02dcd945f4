//! Search-as-you-type filtering over the catalog

use crate::catalog::{Catalog, SkillEntry};

impl Catalog {
    /// Filter skills by a query substring
    ///
    /// A skill matches when its name, description, or id contains the query,
    /// case-insensitively. A blank query yields no results (this is the
    /// search affordance, not the listing view - the full set lives in
    /// [`Catalog::all_skills`]). Results follow catalog order; `limit` caps
    /// the suggestion list when present.
    #[must_use]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SkillEntry<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let matches = self.all_skills().into_iter().filter(|entry| {
            let skill = entry.skill;
            skill.name.to_lowercase().contains(&query)
                || skill.description.to_lowercase().contains(&query)
                || skill
                    .id
                    .as_ref()
                    .is_some_and(|id| id.to_lowercase().contains(&query))
        });

        match limit {
            Some(n) => matches.take(n).collect(),
            None => matches.collect(),
        }
    }
}

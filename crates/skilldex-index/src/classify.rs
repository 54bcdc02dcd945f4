//! Path-depth classification of skills into the category hierarchy

/// Where a skill lands in the two-level hierarchy
///
/// Derived solely from the skill folder's path relative to the catalog root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Top-level category slug (first path segment)
    pub category: String,

    /// Subcategory slug, present only at depth >= 3
    pub subcategory: Option<String>,

    /// Skill slug (terminal path segment)
    pub skill: String,
}

/// Classify a skill folder path relative to the catalog root
///
/// The rule is purely positional:
/// - depth 1 (`github`): category = `github`, no subcategory, slug = `github`
/// - depth 2 (`ai-utilities/rag-manager`): category = `ai-utilities`,
///   no subcategory, slug = `rag-manager`
/// - depth >= 3 (`ai/tools/x/y`): category = `ai`, subcategory = `tools`,
///   slug = last segment
///
/// Depth 0 (the catalog root itself) has no valid classification and
/// returns `None`; the builder never produces such a path.
#[must_use]
pub fn classify(rel_path: &str) -> Option<Classification> {
    let segments: Vec<&str> = rel_path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => None,
        [only] => Some(Classification {
            category: (*only).to_string(),
            subcategory: None,
            skill: (*only).to_string(),
        }),
        [category, skill] => Some(Classification {
            category: (*category).to_string(),
            subcategory: None,
            skill: (*skill).to_string(),
        }),
        [category, subcategory, .., skill] => Some(Classification {
            category: (*category).to_string(),
            subcategory: Some((*subcategory).to_string()),
            skill: (*skill).to_string(),
        }),
    }
}

/// Turn a hyphenated slug into a display name
///
/// Splits on `-`, capitalizes the first letter of each word, joins with a
/// space. Pure ASCII capitalization, no locale awareness.
#[must_use]
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("github", "github", None, "github")]
    #[case("ai-utilities/rag-manager", "ai-utilities", None, "rag-manager")]
    #[case(
        "system-integrations/version-control/github-repo-manager",
        "system-integrations",
        Some("version-control"),
        "github-repo-manager"
    )]
    #[case(
        "ai/generation/audio/suno-songwriter",
        "ai",
        Some("generation"),
        "suno-songwriter"
    )]
    fn test_classify_depth_rule(
        #[case] path: &str,
        #[case] category: &str,
        #[case] subcategory: Option<&str>,
        #[case] skill: &str,
    ) {
        let c = classify(path).unwrap();
        assert_eq!(c.category, category);
        assert_eq!(c.subcategory.as_deref(), subcategory);
        assert_eq!(c.skill, skill);
    }

    #[test]
    fn test_classify_depth_zero_is_none() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("/"), None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let path = "a/b/c/d/e";
        assert_eq!(classify(path), classify(path));
    }

    #[rstest]
    #[case("github", "Github")]
    #[case("ai-utilities", "Ai Utilities")]
    #[case("system-integrations", "System Integrations")]
    #[case("a", "A")]
    #[case("", "")]
    fn test_title_case(#[case] slug: &str, #[case] expected: &str) {
        assert_eq!(title_case(slug), expected);
    }

    #[test]
    fn test_title_case_collapses_nothing() {
        // Consecutive hyphens produce empty words joined by spaces; the
        // advisory slug validation warns about such slugs upstream.
        assert_eq!(title_case("a--b"), "A  B");
    }
}

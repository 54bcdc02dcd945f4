//! Skill document types: raw frontmatter and the derived index entry

use serde::{Deserialize, Serialize};

/// Raw YAML frontmatter of a SKILL.md document
///
/// Every field is optional; defaults are applied when the [`Skill`] index
/// entry is derived. Unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillHeader {
    /// Human-readable skill name (falls back to the folder name)
    #[serde(default)]
    pub name: Option<String>,

    /// Stable identifier (optional, surfaced as-is)
    #[serde(default)]
    pub id: Option<String>,

    /// Version string (defaults to "1.0.0")
    #[serde(default)]
    pub version: Option<String>,

    /// Short description, trimmed on derivation
    #[serde(default)]
    pub description: Option<String>,

    /// Commands the skill provides, in declaration order
    #[serde(default)]
    pub commands: Option<Vec<String>>,

    /// Environment variables the skill expects, in declaration order
    #[serde(default)]
    pub env: Option<Vec<String>>,
}

/// A single skill as it appears in the index
///
/// Derived from a [`SkillHeader`] plus its catalog location. `path` is the
/// unique key: no two skills in one index share a path. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Terminal path segment of the skill's folder
    pub slug: String,

    /// Display name (header `name` or the slug when absent)
    pub name: String,

    /// Stable identifier, `null` when the header has none
    pub id: Option<String>,

    /// Version string
    pub version: String,

    /// Trimmed description (empty when absent)
    pub description: String,

    /// Commands in declaration order
    pub commands: Vec<String>,

    /// Environment variables in declaration order
    pub env: Vec<String>,

    /// Path of the skill's folder relative to the catalog root, `/`-separated
    pub path: String,

    /// Trimmed free-form markdown body
    pub markdown_body: String,
}

impl Skill {
    /// Derive an index entry from a parsed header, applying defaults
    #[must_use]
    pub fn from_header(header: SkillHeader, slug: &str, path: &str, body: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: header.name.unwrap_or_else(|| slug.to_string()),
            id: header.id,
            version: header.version.unwrap_or_else(|| "1.0.0".to_string()),
            description: header.description.unwrap_or_default().trim().to_string(),
            commands: header.commands.unwrap_or_default(),
            env: header.env.unwrap_or_default(),
            path: path.to_string(),
            markdown_body: body.trim().to_string(),
        }
    }

    /// Outbound link to the skill's source location under `base`
    ///
    /// `base` is the URL of the catalog root (e.g. a repository tree URL).
    #[must_use]
    pub fn source_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_applies_defaults() {
        let skill = Skill::from_header(SkillHeader::default(), "alpha", "tools/alpha", "body");

        assert_eq!(skill.slug, "alpha");
        assert_eq!(skill.name, "alpha");
        assert_eq!(skill.id, None);
        assert_eq!(skill.version, "1.0.0");
        assert_eq!(skill.description, "");
        assert!(skill.commands.is_empty());
        assert!(skill.env.is_empty());
        assert_eq!(skill.path, "tools/alpha");
        assert_eq!(skill.markdown_body, "body");
    }

    #[test]
    fn test_from_header_trims_description_and_body() {
        let header = SkillHeader {
            description: Some("  Does X  ".to_string()),
            ..SkillHeader::default()
        };
        let skill = Skill::from_header(header, "alpha", "tools/alpha", "\n\n# Alpha\n\n");

        assert_eq!(skill.description, "Does X");
        assert_eq!(skill.markdown_body, "# Alpha");
    }

    #[test]
    fn test_from_header_prefers_declared_fields() {
        let header = SkillHeader {
            name: Some("Alpha Tool".to_string()),
            id: Some("alpha-tool".to_string()),
            version: Some("2.1.0".to_string()),
            description: Some("Does X".to_string()),
            commands: Some(vec!["x".to_string()]),
            env: Some(vec!["API_KEY".to_string()]),
        };
        let skill = Skill::from_header(header, "alpha", "tools/alpha", "");

        assert_eq!(skill.name, "Alpha Tool");
        assert_eq!(skill.id.as_deref(), Some("alpha-tool"));
        assert_eq!(skill.version, "2.1.0");
        assert_eq!(skill.commands, vec!["x"]);
        assert_eq!(skill.env, vec!["API_KEY"]);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let skill = Skill::from_header(SkillHeader::default(), "alpha", "tools/alpha", "body");
        let json = serde_json::to_value(&skill).unwrap();

        assert!(json.get("markdownBody").is_some());
        assert!(json.get("markdown_body").is_none());
        assert_eq!(json["id"], serde_json::Value::Null);
    }

    #[test]
    fn test_source_url() {
        let skill = Skill::from_header(SkillHeader::default(), "alpha", "tools/alpha", "");

        assert_eq!(
            skill.source_url("https://example.com/catalog/tree/main"),
            "https://example.com/catalog/tree/main/tools/alpha"
        );
        // Trailing slash on the base is tolerated
        assert_eq!(
            skill.source_url("https://example.com/catalog/"),
            "https://example.com/catalog/tools/alpha"
        );
    }
}

//! SKILL.md document parsing

use crate::document::SkillHeader;
use crate::error::{IndexError, Result};

/// Parse a SKILL.md document into its header and body
///
/// Expected format:
/// ```yaml
/// ---
/// name: Skill Name
/// description: Description here
/// ---
///
/// # Markdown body
/// Content here...
/// ```
///
/// # Errors
///
/// Returns error if:
/// - The opening `---` is never closed (`UnterminatedHeader`)
/// - The YAML between the delimiters is invalid
///
/// # Notes
///
/// - A document that does not open with `---` is valid: the header is empty
///   and the entire content is the body
/// - Only the first closing `---` line ends the header; further `---` in the
///   body are preserved as content (e.g. Markdown horizontal rules)
/// - Empty body is valid
pub fn parse_document(content: &str) -> Result<(SkillHeader, String)> {
    let Some(rest) = strip_opening_delimiter(content) else {
        return Ok((SkillHeader::default(), content.to_string()));
    };

    // The header ends at the first line consisting of ---
    let mut header_end = None;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            header_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((frontmatter_end, body_start)) = header_end else {
        return Err(IndexError::UnterminatedHeader);
    };

    let frontmatter = &rest[..frontmatter_end];
    let header: SkillHeader = if frontmatter.trim().is_empty() {
        SkillHeader::default()
    } else {
        serde_yaml::from_str(frontmatter)?
    };
    let body = rest[body_start..].to_string();

    Ok((header, body))
}

/// Strip the opening `---` line, returning the remainder
///
/// Returns `None` when the document has no frontmatter block at all.
fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    // Must be a bare delimiter line, not e.g. "---foo"
    match rest.chars().next() {
        Some('\n') => Some(&rest[1..]),
        Some('\r') => rest.strip_prefix("\r\n"),
        None => Some(rest),
        Some(_) => None,
    }
}

//! Advisory slug validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for well-formed catalog slugs
///
/// Valid format: hyphen-case (lowercase alphanumeric + hyphens)
/// - Must start and end with alphanumeric
/// - Cannot have consecutive hyphens
/// - Pattern: ^[a-z0-9]+(-[a-z0-9]+)*$
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("Failed to compile slug regex"));

/// Check whether a slug is well-formed hyphen-case
///
/// The builder indexes any folder name it finds, so this is advisory only:
/// the caller warns on ill-formed slugs instead of failing the build.
#[must_use]
pub fn is_well_formed_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

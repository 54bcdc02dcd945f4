//! Catalog scanning and index construction

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::SKILL_FILE_NAME;
use crate::classify::classify;
use crate::document::Skill;
use crate::error::{IndexError, Result};
use crate::icons::IconMap;
use crate::index::{Index, IndexAccumulator};
use crate::parser::parse_document;
use crate::validation::is_well_formed_slug;

/// Top-level directory names never scanned for skills
///
/// Version control metadata, tooling config, dependency caches, the site's
/// own source tree, and example fixtures.
const EXCLUDED_TOP_LEVEL: &[&str] = &[
    ".git",
    ".github",
    ".claude",
    "node_modules",
    "target",
    "site",
    "examples",
];

/// Directory names pruned at any depth, not just the top level
const PRUNED_ANYWHERE: &[&str] = &["node_modules", "site"];

/// Builds the index artifact from a catalog directory tree
///
/// A pure function of the tree's contents: re-running over an unchanged
/// catalog produces an identical index apart from the generation timestamp.
/// Fail-fast and all-or-nothing - one malformed document aborts the whole
/// build before anything is written.
///
/// ```no_run
/// use skilldex_index::{IconMap, IndexBuilder};
///
/// # fn main() -> skilldex_index::Result<()> {
/// let index = IndexBuilder::new("./catalog")
///     .icons(IconMap::default().with_icon("robotics", "\u{1f9be}"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IndexBuilder {
    root: PathBuf,
    icons: IconMap,
    excluded: HashSet<String>,
}

impl IndexBuilder {
    /// Create a builder for the given catalog root
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            icons: IconMap::default(),
            excluded: EXCLUDED_TOP_LEVEL.iter().map(ToString::to_string).collect(),
        }
    }

    /// Set the category icon configuration
    #[must_use]
    pub fn icons(mut self, icons: IconMap) -> Self {
        self.icons = icons;
        self
    }

    /// Exclude an additional top-level directory name from scanning
    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    /// Find every SKILL.md under the catalog root, in stable order
    ///
    /// Excluded top-level names and dependency-cache/site subtrees are
    /// pruned; hidden entries are skipped. Ordering is deterministic per run
    /// (lexicographic traversal).
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(IndexError::invalid_root(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_pruned(e))
        {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && path.file_name() == Some(std::ffi::OsStr::new(SKILL_FILE_NAME)) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Build the index: discover, parse, classify, accumulate, sort
    ///
    /// # Errors
    ///
    /// Returns `MalformedDocument` on the first undecodable header; nothing
    /// is written and no partial index is produced.
    pub fn build(&self) -> Result<Index> {
        let files = self.discover()?;
        let mut accumulator = IndexAccumulator::new(self.icons.clone());

        for file in &files {
            let rel_dir = self.relative_dir(file);
            let Some(classification) = classify(&rel_dir) else {
                tracing::warn!(path = %file.display(), "skill document outside any category, skipping");
                continue;
            };

            let content = fs::read_to_string(file)?;
            let (header, body) =
                parse_document(&content).map_err(|e| e.for_document(file.clone()))?;

            if !is_well_formed_slug(&classification.skill) {
                tracing::warn!(slug = %classification.skill, "skill folder is not hyphen-case");
            }

            let skill = Skill::from_header(header, &classification.skill, &rel_dir, &body);
            tracing::debug!(path = %rel_dir, name = %skill.name, "indexed skill");
            accumulator.insert(&classification, skill);
        }

        let index = accumulator.finish();
        debug_assert!(index.validate(), "skill count invariant violated");

        tracing::info!(
            skills = index.total_skills,
            categories = index.categories.len(),
            "built skills index"
        );

        Ok(index)
    }

    /// Skill folder path relative to the catalog root, `/`-separated
    fn relative_dir(&self, skill_file: &Path) -> String {
        let dir = skill_file.parent().unwrap_or(skill_file);
        let rel = dir.strip_prefix(&self.root).unwrap_or(dir);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether a directory entry should be pruned from the walk
    fn is_pruned(&self, entry: &walkdir::DirEntry) -> bool {
        let Some(name) = entry.file_name().to_str() else {
            return true;
        };

        // Hidden entries anywhere (the root itself may be ".")
        if entry.depth() > 0 && name.starts_with('.') {
            return true;
        }

        if entry.file_type().is_dir() {
            if entry.depth() == 1 && self.excluded.contains(name) {
                return true;
            }
            if PRUNED_ANYWHERE.contains(&name) {
                return true;
            }
        }

        false
    }
}

/// Serialize an index to pretty JSON at `out`, creating missing parent dirs
///
/// No atomicity guarantee: acceptable for a build-time tool. Build failures
/// happen before this is called, so an existing artifact is never clobbered
/// by a failed build.
pub fn write_index(index: &Index, out: impl AsRef<Path>) -> Result<()> {
    let out = out.as_ref();

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(index)?;
    fs::write(out, json)?;

    tracing::info!(path = %out.display(), "wrote skills index");
    Ok(())
}

#![deny(unsafe_code)]

//! # skilldex-index
//!
//! Index builder for a skills catalog - the offline half of skilldex.
//!
//! ## Overview
//!
//! A skills catalog is a directory tree where each skill is a folder holding
//! a `SKILL.md` document: YAML frontmatter (name, id, version, description,
//! commands, env) followed by a free-form markdown body. The builder walks
//! the tree, parses every document, classifies it into a two-level
//! category/subcategory hierarchy derived from its path, and emits one
//! aggregated JSON index consumed by the browsing layer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use skilldex_index::{IndexBuilder, Result, write_index};
//!
//! fn main() -> Result<()> {
//!     let index = IndexBuilder::new("./catalog").build()?;
//!     println!(
//!         "{} skills across {} categories",
//!         index.total_skills,
//!         index.categories.len()
//!     );
//!     write_index(&index, "site/public/skills-index.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## SKILL.md Format
//!
//! ```yaml
//! ---
//! name: Github Repo Manager
//! id: github-repo-manager
//! version: 1.2.0
//! description: Manage repositories from the agent
//! commands:
//!   - gh repo create
//! env:
//!   - GITHUB_TOKEN
//! ---
//!
//! # Markdown Body
//!
//! Instructions and documentation here...
//! ```
//!
//! The frontmatter block is optional: a document without one yields a skill
//! built entirely from defaults and its folder name, with the whole file as
//! body. A block that opens and never closes, or that holds invalid YAML,
//! fails the build - the index is all-or-nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod builder;
mod classify;
mod document;
mod error;
mod icons;
mod index;
mod parser;
mod validation;

// Re-exports
pub use builder::{IndexBuilder, write_index};
pub use classify::{Classification, classify, title_case};
pub use document::{Skill, SkillHeader};
pub use error::{IndexError, Result};
pub use icons::IconMap;
pub use index::{Category, Index, Subcategory};
pub use parser::parse_document;

/// Name of the metadata document the builder looks for.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Category, IconMap, Index, IndexBuilder, IndexError, Result, Skill, Subcategory,
        write_index,
    };
}

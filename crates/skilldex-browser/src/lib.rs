#![deny(unsafe_code)]

//! # skilldex-browser
//!
//! Read-only browsing views over a skills catalog index.
//!
//! The index artifact produced by `skilldex-index` is loaded exactly once;
//! every view after that is a pure function of the loaded data plus caller
//! state (selected category, search query). Nothing here mutates the index
//! or touches the catalog tree.
//!
//! ```no_run
//! use skilldex_browser::{Catalog, Result};
//!
//! fn main() -> Result<()> {
//!     let catalog = Catalog::load("site/public/skills-index.json")?;
//!
//!     let overview = catalog.overview();
//!     println!("{} skills, {} categories", overview.total_skills, overview.category_count);
//!
//!     for hit in catalog.search("pdf", Some(8)) {
//!         println!("{} ({})", hit.skill.name, hit.context);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod search;

pub use catalog::{Catalog, CatalogOverview, CategoryTile, SkillEntry};
pub use error::{BrowserError, Result};

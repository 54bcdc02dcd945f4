use clap::{Parser, Subcommand};

/// Default catalog root for `build`
pub const DEFAULT_ROOT: &str = ".";

/// Default index artifact path, shared by the builder and the views
pub const DEFAULT_INDEX: &str = "site/public/skills-index.json";

#[derive(Parser)]
#[command(name = "skilldex")]
#[command(version, about = "Build and browse a skills catalog index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the catalog and write the skills index
    Build {
        /// Catalog root to scan
        #[arg(long, default_value = DEFAULT_ROOT, env = "SKILLDEX_ROOT")]
        root: String,

        /// Output path for the index artifact
        #[arg(long, default_value = DEFAULT_INDEX, env = "SKILLDEX_INDEX")]
        out: String,
    },

    /// Show catalog statistics and category tiles
    Stats {
        /// Index artifact to read
        #[arg(long, default_value = DEFAULT_INDEX, env = "SKILLDEX_INDEX")]
        index: String,
    },

    /// Search skills by name, description, or id
    Search {
        /// Query substring (case-insensitive)
        query: String,

        /// Index artifact to read
        #[arg(long, default_value = DEFAULT_INDEX, env = "SKILLDEX_INDEX")]
        index: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 8)]
        limit: usize,
    },

    /// Show one skill's details by its catalog path
    Show {
        /// Skill path relative to the catalog root (e.g. tools/alpha)
        path: String,

        /// Index artifact to read
        #[arg(long, default_value = DEFAULT_INDEX, env = "SKILLDEX_INDEX")]
        index: String,
    },
}

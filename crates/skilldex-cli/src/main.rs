mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use skilldex_browser::Catalog;
use skilldex_index::{IndexBuilder, write_index};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build { root, out } => build(&root, &out),
        Commands::Stats { index } => stats(&index),
        Commands::Search {
            query,
            index,
            limit,
        } => search(&index, &query, limit),
        Commands::Show { path, index } => show(&index, &path),
    }
}

fn build(root: &str, out: &str) -> Result<()> {
    let index = IndexBuilder::new(root)
        .build()
        .with_context(|| format!("failed to build skills index from {root}"))?;
    write_index(&index, out).with_context(|| format!("failed to write {out}"))?;

    println!(
        "Built skills index: {} skills across {} categories",
        index.total_skills,
        index.categories.len()
    );
    println!("  -> {out}");
    Ok(())
}

fn load_catalog(index_path: &str) -> Result<Catalog> {
    Catalog::load(index_path)
        .with_context(|| format!("failed to load skills index from {index_path} (run `skilldex build` first?)"))
}

fn stats(index_path: &str) -> Result<()> {
    let catalog = load_catalog(index_path)?;
    let overview = catalog.overview();

    println!(
        "{} skills across {} categories (generated {})",
        overview.total_skills,
        overview.category_count,
        overview.generated_at.to_rfc3339()
    );
    for tile in &overview.tiles {
        println!("  {} {} ({}): {} skills", tile.icon, tile.name, tile.slug, tile.skill_count);
    }
    Ok(())
}

fn search(index_path: &str, query: &str, limit: usize) -> Result<()> {
    let catalog = load_catalog(index_path)?;
    let hits = catalog.search(query, Some(limit));

    if hits.is_empty() {
        println!("No skills matching \"{query}\"");
        return Ok(());
    }

    for hit in hits {
        println!(
            "{} {} [{}] - {}",
            hit.icon, hit.skill.name, hit.context, hit.skill.description
        );
    }
    Ok(())
}

fn show(index_path: &str, path: &str) -> Result<()> {
    let catalog = load_catalog(index_path)?;
    let Some(entry) = catalog.skill(path) else {
        bail!("no skill at path {path}");
    };
    let skill = entry.skill;

    println!("{} ({})", skill.name, entry.context);
    println!("  path:    {}", skill.path);
    println!("  version: {}", skill.version);
    if let Some(id) = &skill.id {
        println!("  id:      {id}");
    }
    if !skill.description.is_empty() {
        println!("  about:   {}", skill.description);
    }
    if !skill.commands.is_empty() {
        println!("  commands: {}", skill.commands.join(", "));
    }
    if !skill.env.is_empty() {
        println!("  env:      {}", skill.env.join(", "));
    }
    if !skill.markdown_body.is_empty() {
        println!("\n{}", skill.markdown_body);
    }
    Ok(())
}

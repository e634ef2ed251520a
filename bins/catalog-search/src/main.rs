//! catalog-search: fuzzy product search over a JSON catalog.

use catalog_cli::output::{format_count, format_duration, format_score, ResultRow, Status};
use catalog_cli::progress::query_progress;
use catalog_core::config::{Config, WeightsConfig};
use catalog_core::{Error, ResultExt};
use catalog_search::{
    classify_word, filter_by_category, levenshtein_distance, normalize, parse_catalog, product_engine,
    score_field, similarity, CatalogItem, CONTAINS_SCORE, FieldWeights, MatchTier, SearchResult,
};
use catalog_telemetry::{metrics, TelemetryConfig, Timer};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "catalog-search")]
#[command(about = "Weighted fuzzy search over product catalogs")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to .catalog-search.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print collected metrics as JSON on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a catalog for one query
    Query {
        /// JSON array of catalog items
        catalog: PathBuf,
        /// Free-text query
        query: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only search items in this category
        #[arg(long)]
        category: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every query in a file against one catalog
    Batch {
        /// JSON array of catalog items
        catalog: PathBuf,
        /// Text file with one query per line; `#` starts a comment
        queries: PathBuf,
        /// Maximum number of results per query
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a query against a single text value
    Score {
        /// Free-text query
        query: String,
        /// Field value to score against
        text: String,
    },
    /// Edit distance and similarity between two words
    Distance {
        /// First word
        a: String,
        /// Second word
        b: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            Status::error(&err.to_string());
            std::process::exit(err.exit_code());
        }
    };

    catalog_telemetry::init_with_config(TelemetryConfig {
        log_level: if cli.verbose { "debug".to_string() } else { config.schema.logging.level.clone() },
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    })?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    if let Err(err) = run(cli.command, &config) {
        tracing::warn!(code = %err.code, "Command failed");
        Status::error(&err.to_string());
        std::process::exit(err.exit_code());
    }

    if cli.metrics {
        println!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    Ok(())
}

fn run(command: Commands, config: &Config) -> catalog_core::Result<()> {
    let search = &config.schema.search;

    match command {
        Commands::Query { catalog, query, limit, category, json } => {
            let items = filter_by_category(&load_catalog(&catalog)?, category);
            let limit = limit.unwrap_or(search.max_results);
            let engine = product_engine(&field_weights(&search.weights));

            let timer = Timer::start("search.duration_ms");
            let results = engine.search(&items, &query, limit);
            let elapsed = timer.stop();
            metrics().increment("search.queries");

            tracing::info!(query = %query, candidates = items.len(), hits = results.len(), "Query complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&results_json(&results))?);
            } else if results.is_empty() {
                Status::warning(&format!("No matches for \"{}\"", query));
            } else {
                Status::header(&format!(
                    "{} for \"{}\" ({})",
                    format_count(results.len(), "match", "matches"),
                    query,
                    format_duration(elapsed)
                ));
                for (i, result) in results.iter().enumerate() {
                    row(i, result).print();
                }
            }
        }

        Commands::Batch { catalog, queries, limit, json } => {
            let items = load_catalog(&catalog)?;
            let limit = limit.unwrap_or(search.max_results);
            let queries = load_queries(&queries)?;
            let engine = product_engine(&field_weights(&search.weights));

            let started = Instant::now();
            let pb = query_progress(queries.len() as u64);
            let mut summaries = Vec::with_capacity(queries.len());

            for query in &queries {
                let hits_before = engine.cache_stats().hits;
                let results = {
                    let _timer = Timer::start("search.duration_ms");
                    engine.search(&items, query, limit)
                };
                let cached = engine.cache_stats().hits > hits_before;

                metrics().increment("search.queries");
                if cached {
                    metrics().increment("search.cache_hits");
                }
                pb.inc(1);

                summaries.push(serde_json::json!({
                    "query": query,
                    "cached": cached,
                    "hits": results.len(),
                    "top": results.first().map(|r| serde_json::json!({
                        "id": r.item.id,
                        "name": r.item.name,
                        "score": r.score,
                    })),
                }));
            }
            pb.finish_and_clear();

            let stats = engine.cache_stats();
            metrics().gauge("search.cache_entries", stats.entries as u64);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "queries": summaries,
                        "cache": stats,
                    }))?
                );
            } else {
                Status::header(&format!(
                    "{} against {}",
                    format_count(queries.len(), "query", "queries"),
                    format_count(items.len(), "item", "items")
                ));
                for summary in &summaries {
                    let top = summary["top"]["name"].as_str().unwrap_or("-");
                    println!(
                        "  {:<24} {:>3} hits  {}{}",
                        summary["query"].as_str().unwrap_or_default(),
                        summary["hits"],
                        top,
                        if summary["cached"].as_bool().unwrap_or(false) { "  (cached)" } else { "" },
                    );
                }
                Status::info(&format!(
                    "Cache: {} entries, {} hits, {} misses in {}",
                    stats.entries,
                    stats.hits,
                    stats.misses,
                    format_duration(started.elapsed())
                ));
            }
        }

        Commands::Score { query, text } => {
            println!("Score: {}", format_score(score_field(&query, &text)));

            let value = normalize(&text);
            for token in normalize(&query).split_whitespace() {
                if value.contains(token) {
                    println!("  {:<16} Contains ({})", token, format_score(CONTAINS_SCORE));
                    continue;
                }
                let tier = best_tier(token, &value);
                println!("  {:<16} {:?} ({})", token, tier, format_score(tier.score()));
            }
        }

        Commands::Distance { a, b } => {
            println!("Distance: {}", levenshtein_distance(&a, &b));
            println!("Similarity: {:.3}", similarity(&a, &b));
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> catalog_core::Result<Vec<Arc<CatalogItem>>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading catalog {}", path.display()))?;

    let items = parse_catalog(&content)
        .map_err(|e| Error::invalid_catalog(e.to_string()).with_context(format!("Parsing {}", path.display())))?;

    tracing::debug!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(items)
}

fn load_queries(path: &Path) -> catalog_core::Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(parse_queries(&content))
}

/// Non-blank, non-comment lines, trimmed.
fn parse_queries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn field_weights(weights: &WeightsConfig) -> FieldWeights {
    FieldWeights {
        name: weights.name,
        description: weights.description,
        sku: weights.sku,
    }
}

/// Best-scoring word tier for `token` against a normalized field value.
fn best_tier(token: &str, value: &str) -> MatchTier {
    value
        .split_whitespace()
        .map(|word| classify_word(token, word))
        .fold(MatchTier::None, |best, tier| if tier.score() > best.score() { tier } else { best })
}

fn row(index: usize, result: &SearchResult<Arc<CatalogItem>>) -> ResultRow<'_> {
    ResultRow {
        rank: index + 1,
        id: result.item.id,
        name: &result.item.name,
        sku: &result.item.sku,
        score: result.score,
        matched_fields: result.matched_fields,
    }
}

fn results_json(results: &[SearchResult<Arc<CatalogItem>>]) -> serde_json::Value {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            serde_json::json!({
                "rank": i + 1,
                "id": r.item.id,
                "name": r.item.name,
                "sku": r.item.sku,
                "category_id": r.item.category_id,
                "score": r.score,
                "matched_fields": r.matched_fields,
            })
        })
        .collect()
}

//! `kwmatch` command-line host.
//!
//! Builds a keyword processor from files and inline keywords, then extracts
//! or replaces keywords in text, or resolves a launcher query against the
//! console catalog. Results are printed as JSON.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kwmatch_core::{KeywordProcessor, MatcherConfig};
use kwmatch_search::{Catalog, SearchConfig, SearchEngine, SearchQuery};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kwmatch")]
#[command(about = "Keyword extraction and AWS console lookup", long_about = None)]
struct Cli {
    /// Matcher config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeywordSources {
    /// Keyword file, one `keyword` or `keyword=>value` per line
    #[arg(short = 'f', long = "keywords")]
    keyword_files: Vec<PathBuf>,

    /// JSON or TOML file mapping values to alias lists
    #[arg(short, long = "dict")]
    dict_files: Vec<PathBuf>,

    /// Inline `keyword` or `keyword=>value`
    #[arg(short, long = "word")]
    words: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the values of keywords found in TEXT
    Extract {
        #[command(flatten)]
        sources: KeywordSources,

        /// Edit budget per match (overrides the config file)
        #[arg(short = 'k', long)]
        max_cost: Option<usize>,

        /// Include byte spans
        #[arg(long)]
        spans: bool,

        text: String,
    },
    /// Print TEXT with keywords replaced by their values
    Replace {
        #[command(flatten)]
        sources: KeywordSources,

        /// Edit budget per match (overrides the config file)
        #[arg(short = 'k', long)]
        max_cost: Option<usize>,

        text: String,
    },
    /// Print every stored keyword with its value
    List {
        #[command(flatten)]
        sources: KeywordSources,
    },
    /// Resolve a launcher query to console destinations
    Search {
        /// Catalog file replacing the built-in AWS destinations
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Rank by fuzzy score only
        #[arg(long)]
        fuzzy: bool,

        /// Edit budget per keyword match
        #[arg(short = 'k', long, default_value_t = 1)]
        max_cost: usize,

        query: Vec<String>,
    },
}

#[derive(Serialize)]
struct SpanOutput<'a> {
    value: &'a str,
    start: usize,
    end: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            sources,
            max_cost,
            spans,
            text,
        } => {
            let processor = build_processor(&config, &sources)?;
            let max_cost = max_cost.unwrap_or(config.max_edit_cost);
            if spans {
                let matches: Vec<SpanOutput<'_>> = processor
                    .extract_with_spans(&text, max_cost)
                    .into_iter()
                    .map(|m| SpanOutput {
                        value: m.value,
                        start: m.start,
                        end: m.end,
                    })
                    .collect();
                print_json(&matches)?;
            } else {
                print_json(&processor.extract(&text, max_cost))?;
            }
        }
        Commands::Replace {
            sources,
            max_cost,
            text,
        } => {
            let processor = build_processor(&config, &sources)?;
            let max_cost = max_cost.unwrap_or(config.max_edit_cost);
            println!("{}", processor.replace(&text, max_cost));
        }
        Commands::List { sources } => {
            let processor = build_processor(&config, &sources)?;
            let all: BTreeMap<String, &String> = processor.all_keywords().into_iter().collect();
            print_json(&all)?;
        }
        Commands::Search {
            catalog,
            fuzzy,
            max_cost,
            query,
        } => {
            let catalog = match catalog {
                Some(path) => Catalog::load(&path)
                    .with_context(|| format!("loading catalog {}", path.display()))?,
                None => Catalog::builtin()?,
            };
            let search_config = SearchConfig {
                max_edit_cost: max_cost,
                ..SearchConfig::default()
            };
            let mut engine = SearchEngine::new(catalog, search_config);

            let text = query.join(" ");
            let query = if fuzzy {
                SearchQuery::Fuzzy(text)
            } else {
                SearchQuery::Keywords(text)
            };
            let results = engine.search(&query);
            print_json(&results.into_items())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<MatcherConfig> {
    let Some(path) = path else {
        return Ok(MatcherConfig::default());
    };
    let config = MatcherConfig::load(path)
        .with_context(|| format!("loading config {}", path.display()))?;

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!("invalid config value: {error}");
    }
    Ok(config.with_defaults_for_invalid())
}

fn build_processor(
    config: &MatcherConfig,
    sources: &KeywordSources,
) -> anyhow::Result<KeywordProcessor> {
    let mut processor = KeywordProcessor::from_config(config);

    for path in &sources.keyword_files {
        processor
            .add_keywords_from_file(path)
            .with_context(|| format!("loading keywords from {}", path.display()))?;
    }
    for path in &sources.dict_files {
        processor
            .add_keywords_from_dict_file(path)
            .with_context(|| format!("loading keyword mapping from {}", path.display()))?;
    }
    if !sources.words.is_empty() {
        processor
            .add_keywords_from_reader(sources.words.join("\n").as_bytes())
            .context("parsing inline keywords")?;
    }

    debug!(keywords = processor.len(), "keyword processor ready");
    Ok(processor)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

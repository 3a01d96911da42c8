use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use fuzzy_sort::{SortOptions, Sorter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuzzy-sort")]
#[command(about = "Fuzzy sort the lines of a file against a query", long_about = None)]
struct Cli {
    /// File with one candidate per line
    file: PathBuf,

    /// Search query
    query: String,

    /// Maximum results to print
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Require accents to match even for plain ASCII queries
    #[arg(long)]
    keep_diacritics: bool,

    /// JSON file with scoring weights
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => SortOptions::from_file(path)?,
        None => SortOptions::default(),
    };
    if cli.keep_diacritics {
        options.strip_diacritics = false;
    }
    let sorter = Sorter::new(options)?;

    let content = std::fs::read_to_string(&cli.file)?;
    let mut lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let start = Instant::now();
    let matched = sorter.sort(&mut lines, &cli.query);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let top = &lines[..matched.min(cli.limit)];
    let ranked = sorter.rank(top, &cli.query);

    if cli.json {
        let entries: Vec<serde_json::Value> = ranked
            .iter()
            .map(|r| {
                serde_json::json!({
                    "keyword": top[r.index],
                    "score": r.score,
                    "positions": r.positions,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("🔍 Query: {}", cli.query);
    println!("   Candidates: {}", lines.len());
    println!("   Matched: {}", matched);
    println!("   Latency: {:.2}ms", elapsed_ms);

    if ranked.is_empty() {
        println!("\n❌ No matches");
        return Ok(());
    }

    println!("\n📋 Results:");
    for (i, r) in ranked.iter().enumerate() {
        println!(
            "   {}. {} ({})",
            i + 1,
            r.highlight(top[r.index], "[", "]"),
            r.score
        );
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use criteria::FilterCriteria;
use data_loader::{CandidateRecord, CandidateStore, Years};
use serde::Serialize;
use server::SearchOrchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use translator::{KeywordDictionaries, QueryTranslator};

/// Candidate Filter - search candidate profiles by criteria or plain English
#[derive(Parser)]
#[command(name = "candidate-filter")]
#[command(about = "Filter candidate profiles with structured criteria or natural-language queries", long_about = None)]
struct Cli {
    /// Path to the candidates CSV file
    #[arg(short, long, global = true, default_value = "data/candidates.csv")]
    data: PathBuf,

    /// JSON file overriding the built-in keyword dictionaries
    #[arg(long, global = true)]
    dictionaries: Option<PathBuf>,

    /// Print responses as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter candidates with structured criteria
    Filter(FilterArgs),

    /// Search candidates with a natural-language query
    Search {
        /// e.g. "python developers from IIT with minimum 2 years"
        query: String,
    },

    /// Print every loaded candidate
    List,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Substring of the candidate name
    #[arg(long)]
    name: Option<String>,

    /// Required skill (repeatable; all must match)
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Optional skill (repeatable; any one matches)
    #[arg(long = "optional-skill")]
    optional_skills: Vec<String>,

    /// Institution (repeatable)
    #[arg(long = "institute")]
    institutions: Vec<String>,

    /// Course (repeatable)
    #[arg(long = "course")]
    courses: Vec<String>,

    /// Company (repeatable)
    #[arg(long = "company")]
    companies: Vec<String>,

    #[arg(long)]
    min_experience: Option<Years>,

    #[arg(long)]
    max_experience: Option<Years>,

    /// Substring of the phone number
    #[arg(long)]
    phone: Option<String>,

    /// Substring of the email address
    #[arg(long)]
    email: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            name: args.name,
            skills: args.skills,
            optional_skills: args.optional_skills,
            institutions: args.institutions,
            courses: args.courses,
            min_experience: args.min_experience,
            max_experience: args.max_experience,
            phone_number: args.phone,
            email: args.email,
            companies: args.companies,
        }
    }
}

/// Queries the benchmark draws from at random
const BENCHMARK_QUERIES: &[&str] = &[
    "Show me candidates from IIT or MIT with minimum 2 years of experience in java",
    "Find python developers with 3-5 years experience",
    "Candidates with react and nodejs skills from Google or Microsoft",
    "Show me developers from Stanford with machine learning experience",
    "Find candidates with java and spring skills from TCS",
    "Show me candidates with docker and kubernetes skills",
    "Candidates from MIT or Stanford with computer science degree",
    "Python or java developers with minimum 2 years experience",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = CandidateStore::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load candidates from {}", cli.data.display()))?;
    if !cli.json {
        println!(
            "{} Loaded {} candidates in {:?}",
            "✓".green(),
            store.len(),
            start.elapsed()
        );
    }

    let dictionaries = match &cli.dictionaries {
        Some(path) => KeywordDictionaries::from_json_file(path)
            .with_context(|| format!("Failed to load dictionaries from {}", path.display()))?,
        None => KeywordDictionaries::default(),
    };
    let translator = QueryTranslator::new(Arc::new(dictionaries));
    let orchestrator = SearchOrchestrator::new(Arc::new(store), translator);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter(args) => handle_filter(&orchestrator, args.into(), cli.json)?,
        Commands::Search { query } => handle_search(&orchestrator, &query, cli.json)?,
        Commands::List => handle_list(&orchestrator, cli.json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(orchestrator: &SearchOrchestrator, criteria: FilterCriteria, json: bool) -> Result<()> {
    let response = orchestrator.filter_candidates(&criteria)?;
    if json {
        return print_json(&response);
    }

    println!("{}", "Applied filter:".bold().blue());
    println!("{}", serde_json::to_string_pretty(&response.filter)?);
    print_candidates(&response.candidates);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(orchestrator: &SearchOrchestrator, query: &str, json: bool) -> Result<()> {
    let response = orchestrator.natural_language_search(query);
    if json {
        return print_json(&response);
    }

    println!("{} {}", "Query:".bold().blue(), response.query);
    println!("{} {}", "Parsed as:".bold().blue(), response.parsed_query);
    print_candidates(&response.candidates);
    Ok(())
}

/// Handle the 'list' command
fn handle_list(orchestrator: &SearchOrchestrator, json: bool) -> Result<()> {
    let candidates = orchestrator.store().all();
    if json {
        return print_json(&candidates);
    }
    print_candidates(candidates);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: SearchOrchestrator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        println!("Nothing to benchmark (0 requests)");
        return Ok(());
    }

    tracing::info!(
        "Running benchmark: {} requests, {} concurrent",
        requests,
        concurrent.max(1)
    );
    let queries: Vec<&'static str> = (0..requests)
        .map(|_| BENCHMARK_QUERIES[rand::random::<u32>() as usize % BENCHMARK_QUERIES.len()])
        .collect();

    // Use tokio tasks to make concurrent requests, at most `concurrent` in flight
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for query in queries {
        let orchestrator = orchestrator.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let elapsed = tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                orchestrator.natural_language_search(query);
                start.elapsed()
            })
            .await?;
            Ok::<_, anyhow::Error>(elapsed)
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Helper function to format and print candidates
fn print_candidates(candidates: &[CandidateRecord]) {
    println!(
        "{}",
        format!("Found {} candidates:", candidates.len()).bold().blue()
    );
    if candidates.is_empty() {
        println!("  (No matching candidates found)");
        return;
    }

    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "{}. {} ({}, {}) - {}-{} years",
            (i + 1).to_string().green(),
            candidate.name.bold(),
            candidate.institute_name,
            candidate.course,
            candidate.min_experience,
            candidate.max_experience
        );
        println!("   {}Skills: {}", "• ".cyan(), candidate.skills.join(", "));
        if !candidate.optional_skills.is_empty() {
            println!(
                "   {}Optional skills: {}",
                "• ".cyan(),
                candidate.optional_skills.join(", ")
            );
        }
        if !candidate.company_name.is_empty() {
            println!("   {}Companies: {}", "• ".cyan(), candidate.company_name.join(", "));
        }
        println!("   {}Contact: {} / {}", "• ".cyan(), candidate.email, candidate.phone_number);
    }
}

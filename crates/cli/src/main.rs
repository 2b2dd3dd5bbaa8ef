use anyhow::{Context, Result, bail};
use catalog::{AnxietySymptom, Category, Dataset, TimePreference};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{RecommendedTechnique, ScoreBoard};
use server::{OnboardingRequest, RoutineOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Steady - pre-competition routine recommender
#[derive(Parser)]
#[command(name = "steady")]
#[command(about = "Recommend mental-skills techniques for pre-competition nerves", long_about = None)]
struct Cli {
    /// Directory holding techniques.dat and accounts.dat
    #[arg(short, long, env = "STEADY_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend techniques for a set of symptoms
    Recommend {
        /// Comma-separated symptom tags, e.g. overthinking,rushing
        #[arg(long, value_delimiter = ',', required = true)]
        symptoms: Vec<String>,

        /// Time budget: 2min, 5min or 10min
        #[arg(long, default_value = "5min")]
        time: String,

        /// Show the score and reason behind each pick
        #[arg(long)]
        explain: bool,
    },

    /// List the technique catalog
    Techniques {
        /// Only show one category
        #[arg(long)]
        category: Option<Category>,
    },

    /// Run concurrent onboarding requests against the in-memory service
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let dataset = Dataset::load_from_dir(&cli.data_dir).context("Failed to load seed data")?;
    println!(
        "{} Loaded {} techniques in {:?}",
        "✓".green(),
        dataset.techniques.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            symptoms,
            time,
            explain,
        } => handle_recommend(&dataset, &symptoms, &time, explain)?,
        Commands::Techniques { category } => handle_techniques(&dataset, category),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&dataset, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(dataset: &Dataset, symptoms: &[String], time: &str, explain: bool) -> Result<()> {
    let (symptoms, unknown) = recommender::parse_symptoms(symptoms);
    for tag in &unknown {
        println!("{} ignoring unknown symptom '{}'", "!".yellow(), tag);
    }

    let catalog = dataset.techniques.techniques();
    let recommendations = recommender::recommend(&symptoms, time, &catalog)?;

    if explain {
        print_scores(&symptoms);
    }
    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'techniques' command
fn handle_techniques(dataset: &Dataset, category: Option<Category>) {
    let stats = dataset.techniques.category_stats();

    for (shown, summary) in stats
        .iter()
        .filter(|(c, _)| category.is_none_or(|wanted| wanted == **c))
    {
        println!(
            "{} ({} techniques, {} min total)",
            shown.to_string().bold().blue(),
            summary.technique_count,
            summary.total_minutes
        );
        for id in dataset.techniques.by_category(*shown) {
            if let Some(technique) = dataset.techniques.get(*id) {
                println!(
                    "  {} {} [{}] {} min",
                    "•".green(),
                    technique.name,
                    technique.slug,
                    technique.duration_minutes
                );
            }
        }
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(dataset: &Dataset, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("requests and concurrent must both be positive");
    }

    let orchestrator = RoutineOrchestrator::in_memory(dataset);
    let permits = Arc::new(Semaphore::new(concurrent));

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let orchestrator = orchestrator.clone();
        let permits = permits.clone();
        let request = random_onboarding();
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            orchestrator.onboard(uuid::Uuid::new_v4(), request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / (timings.len() as u32);
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Random non-empty symptom set and time budget
fn random_onboarding() -> OnboardingRequest {
    let mask = rand::random::<u8>() % 63 + 1;
    let symptoms = AnxietySymptom::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, s)| s.to_string())
        .collect();
    let time = TimePreference::ALL[rand::random::<u8>() as usize % TimePreference::ALL.len()];

    OnboardingRequest {
        sport: Some("Benchmark".to_string()),
        competitive_level: Some("college".to_string()),
        anxiety_symptoms: Some(symptoms),
        time_preference: Some(time.to_string()),
    }
}

fn print_scores(symptoms: &[AnxietySymptom]) {
    println!("{}", "Candidate scores:".bold());
    for entry in ScoreBoard::from_symptoms(symptoms).into_ranked() {
        println!("  {:<16} {}", entry.slug, entry.score);
    }
}

fn print_recommendations(recommendations: &[RecommendedTechnique], explain: bool) {
    println!("{}", "Recommended routine:".bold().blue());
    if recommendations.is_empty() {
        println!("  nothing fits this time budget");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) - {} min",
            (rank + 1).to_string().green(),
            rec.technique.name,
            rec.technique.category,
            rec.technique.duration_minutes
        );
        if explain {
            println!("   {}", rec.match_reason.italic());
        }
    }
    println!(
        "Total: {} min",
        recommender::total_minutes(recommendations)
    );
}

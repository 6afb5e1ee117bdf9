use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use recipe_recommender::{
    load_store, parse_ingredient_input, ArtifactFormat, RecommendOutcome, Recommendation,
    Recommender, RecommenderConfig,
};

/// Recommend recipes from the ingredients you have
#[derive(Parser, Debug)]
#[command(name = "recipe-recommender")]
#[command(about = "Ingredient-based recipe recommendations", long_about = None)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the corpus artifact
    #[arg(short, long)]
    artifact: Option<PathBuf>,

    /// Artifact encoding
    #[arg(long, value_enum)]
    format: Option<ArtifactFormat>,

    /// Number of recipes to show
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Log level
    #[arg(long)]
    log_level: Option<String>,

    /// Comma separated ingredients, e.g. "chicken, rice, bell pepper"
    ingredients: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RecommenderConfig::from_json_file(path)?,
        None => RecommenderConfig::default(),
    };
    if let Some(path) = args.artifact {
        config.artifact_path = path;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting recipe-recommender v{}", env!("CARGO_PKG_VERSION"));
    let store = Arc::new(load_store(&config.artifact_path, config.format)?);
    info!(
        recipes = store.vector_count(),
        valid = store.valid_count(),
        "Corpus loaded"
    );
    let recommender = Recommender::new(store);

    let query = parse_ingredient_input(&args.ingredients);
    let top_n = config.clamp_top_n(args.top_n);
    match recommender.recommend_detailed(query.as_slice(), top_n)? {
        RecommendOutcome::EmptyQuery => println!("Please enter some ingredients!"),
        RecommendOutcome::NoMatches { .. } => {
            println!("No recipes found matching your ingredients.")
        }
        RecommendOutcome::Found {
            recommendations, ..
        } => {
            for rec in &recommendations {
                print_recommendation(rec, &query);
            }
        }
    }
    Ok(())
}

/// Filter from a configured level or directive string, `info` if it does not parse
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn print_recommendation(rec: &Recommendation, query: &[String]) {
    println!("Recipe {}: {}", rec.rank, rec.name);
    println!("  Similarity Score: {:.2}", rec.similarity);
    println!("  Ingredient Overlap: {:.2}%", rec.overlap_with(query));

    println!("  Ingredients");
    for ingredient in &rec.ingredients {
        println!("    - {}", ingredient);
    }

    println!("  Instructions");
    for (i, step) in rec.steps.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }

    println!("  Nutritional Values (% of Daily Value)");
    for line in rec.nutrition.display_lines() {
        println!("    {}", line);
    }
    println!();
}

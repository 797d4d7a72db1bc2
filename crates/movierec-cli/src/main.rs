//! movierec CLI - collaborative-filtering movie recommendations from the terminal.

mod output;
mod repl;
mod repl_commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use movierec_core::{MovieRecConfig, SelfSimilarity, SnapshotStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::{print_recommendations, print_users, OutputFormat};

/// movierec - recommend movies from users with similar taste
#[derive(Parser, Debug)]
#[command(name = "movierec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./movierec.toml when present)
    #[arg(short, long, global = true, env = "MOVIEREC_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Ratings CSV (User_ID, User_Names, Movie_ID, Rating, Timestamp; no header)
    #[arg(long, global = true)]
    ratings: Option<PathBuf>,

    /// Titles CSV (item_id,title header)
    #[arg(long, global = true)]
    titles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend movies for one user
    Recommend {
        /// User display name
        #[arg(short, long, required_unless_present = "user_id", conflicts_with = "user_id")]
        name: Option<String>,

        /// Internal user id
        #[arg(short, long)]
        user_id: Option<u64>,

        /// Number of similar users to consider
        #[arg(short)]
        k: Option<usize>,

        /// Number of recommendations to return
        #[arg(short = 't', long)]
        top_n: Option<usize>,

        /// Whether the user counts among its own neighbours
        #[arg(long, value_enum)]
        self_similarity: Option<SelfSimilarityArg>,

        /// Shorthand for --self-similarity exclude
        #[arg(long, conflicts_with = "self_similarity")]
        exclude_self: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List known user names
    Users {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Start an interactive session
    Repl,
}

/// Command-line spelling of [`SelfSimilarity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SelfSimilarityArg {
    Include,
    Exclude,
}

impl From<SelfSimilarityArg> for SelfSimilarity {
    fn from(arg: SelfSimilarityArg) -> Self {
        match arg {
            SelfSimilarityArg::Include => SelfSimilarity::Include,
            SelfSimilarityArg::Exclude => SelfSimilarity::Exclude,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<MovieRecConfig> {
    let mut config = match &cli.config {
        Some(path) => MovieRecConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => MovieRecConfig::load().context("loading configuration")?,
    };
    if let Some(ratings) = &cli.ratings {
        config.data.ratings_path.clone_from(ratings);
    }
    if let Some(titles) = &cli.titles {
        config.data.titles_path.clone_from(titles);
    }
    Ok(config)
}

fn init_tracing(default_level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(config: &MovieRecConfig) -> anyhow::Result<SnapshotStore> {
    SnapshotStore::open(&config.data).with_context(|| {
        format!(
            "building model from {} and {}",
            config.data.ratings_path.display(),
            config.data.titles_path.display()
        )
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging.level);

    match cli.command {
        Commands::Recommend {
            name,
            user_id,
            k,
            top_n,
            self_similarity,
            exclude_self,
            format,
        } => {
            let mut params = config.engine;
            if let Some(k) = k {
                params.k = k;
            }
            if let Some(top_n) = top_n {
                params.top_n = top_n;
            }
            if let Some(policy) = self_similarity {
                params.self_similarity = policy.into();
            } else if exclude_self {
                params.self_similarity = SelfSimilarity::Exclude;
            }

            let store = open_store(&config)?;
            let snapshot = store.current();
            let recommender = snapshot.recommender();
            let recs = match (name, user_id) {
                (Some(name), _) => recommender.recommend_for_name(&name, &params)?,
                (None, Some(user_id)) => recommender.recommend_for_user(user_id, &params)?,
                (None, None) => anyhow::bail!("either --name or --user-id is required"),
            };
            print_recommendations(&recs, format)?;
        }
        Commands::Users { format } => {
            let store = open_store(&config)?;
            let snapshot = store.current();
            print_users(&snapshot.recommender().user_names(), format)?;
        }
        Commands::Config => print!("{}", config.to_toml_string()?),
        Commands::Repl => {
            let store = open_store(&config)?;
            let repl_config = repl::ReplConfig {
                params: config.engine,
                format: OutputFormat::Table,
                timing: false,
                data: config.data.clone(),
            };
            repl::run(&store, repl_config)?;
        }
    }

    Ok(())
}

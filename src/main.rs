use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use game_recommender::catalog::load_catalog;
use game_recommender::cli_style::{self, get_styles};
use game_recommender::config::{AppConfig, CliConfig, FileConfig};
use game_recommender::recommend::{
    Projection, RecommendFilters, RecommendationQuery, DEFAULT_THRESHOLD,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version)]
struct CliArgs {
    /// Path to the CSV game dataset. Can also be set in the config file.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Genre to recommend games for. Prompted on stdin when absent.
    #[clap(short, long)]
    pub genre: Option<String>,

    /// Keep only games whose platform contains this text (case-insensitive).
    #[clap(short, long)]
    pub platform: Option<String>,

    /// Keep only games with at least this user score (0-100 scale).
    #[clap(long)]
    pub min_user_score: Option<f64>,

    /// Keep only games whose rating contains this text (case-insensitive).
    #[clap(short, long)]
    pub rating: Option<String>,

    /// Minimum recommendation score a game needs to be listed.
    #[clap(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Path to TOML config file. Config file values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Print the recommendations as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

impl CliArgs {
    fn filters(&self) -> RecommendFilters {
        let mut filters = RecommendFilters::none();
        if let Some(platform) = &self.platform {
            filters = filters.with_platform(platform);
        }
        if let Some(min_user_score) = self.min_user_score {
            filters = filters.with_min_user_score(min_user_score);
        }
        if let Some(rating) = &self.rating {
            filters = filters.with_rating(rating);
        }
        filters
    }
}

fn prompt_genre() -> Result<String> {
    print!("Enter the desired genre: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read genre from stdin")?;
    if read == 0 {
        bail!("No genre given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: cli_args.dataset.clone(),
        threshold: cli_args.threshold,
        ..CliConfig::default()
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    let catalog = load_catalog(&app_config.dataset_path, &app_config.fill_defaults)
        .with_context(|| format!("Could not load dataset {:?}", app_config.dataset_path))?;

    let genre = match &cli_args.genre {
        Some(genre) => genre.clone(),
        None => prompt_genre()?,
    };

    let filters = cli_args.filters();
    let projection = if filters.is_empty() && app_config.show_sales {
        Projection::WithSales
    } else {
        Projection::Basic
    };
    let query = RecommendationQuery::genre(&genre)
        .with_threshold(app_config.threshold)
        .with_filters(filters)
        .with_projection(projection);

    let rows = catalog.query(&query);
    info!(
        "{} of {} games recommended for genre '{}'",
        rows.len(),
        catalog.get_games_count(),
        genre
    );

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        cli_style::print_section_header("Games recommended for the desired genre");
        println!();
        cli_style::print_results(&rows);
    }
    Ok(())
}

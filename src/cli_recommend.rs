use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use game_recommender::catalog::{load_catalog, GameCatalog};
use game_recommender::cli_style::{self, get_styles, CommandGroup, CommandHelp};
use game_recommender::config::{AppConfig, CliConfig, FileConfig};
use game_recommender::recommend::{GenreMatch, Projection, RecommendationQuery};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the CSV game dataset.
    #[clap(value_parser = parse_path)]
    pub path: Option<PathBuf>,

    /// Path to TOML config file. Config file values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "", disable_help_subcommand = true)]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Lists every genre in the dataset.
    Genres,

    /// Lists every platform in the dataset.
    Platforms,

    /// Lists every content rating in the dataset.
    Ratings,

    /// Recommends games of the given genre, with global sales.
    Genre {
        genre: String,

        /// Minimum recommendation score, defaults to the configured one.
        #[clap(long)]
        threshold: Option<f64>,
    },

    /// Recommends games of the given genre narrowed by platform,
    /// minimum user score (0-100) and rating. Empty text filters
    /// match every game.
    Recommend {
        genre: String,

        #[clap(long, default_value = "")]
        platform: String,

        #[clap(long, default_value_t = 0.0)]
        min_user_score: f64,

        #[clap(long, default_value = "")]
        rating: String,

        /// Minimum recommendation score, defaults to the configured one.
        #[clap(long)]
        threshold: Option<f64>,
    },

    /// Shows dataset counts and the fuzzy scores for matching and
    /// non-matching genres.
    Stats,

    /// Shows the path of the loaded dataset.
    Where,

    /// Shows the available commands.
    Help,

    /// Close this program.
    Exit,
}

const COMMANDS_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "genres",
        args: "",
        description: "List every genre",
        group: CommandGroup::Browse,
    },
    CommandHelp {
        name: "platforms",
        args: "",
        description: "List every platform",
        group: CommandGroup::Browse,
    },
    CommandHelp {
        name: "ratings",
        args: "",
        description: "List every content rating",
        group: CommandGroup::Browse,
    },
    CommandHelp {
        name: "stats",
        args: "",
        description: "Dataset counts and fuzzy scores",
        group: CommandGroup::Browse,
    },
    CommandHelp {
        name: "genre",
        args: "<GENRE> [--threshold T]",
        description: "Recommend by genre, with global sales",
        group: CommandGroup::Recommend,
    },
    CommandHelp {
        name: "recommend",
        args: "<GENRE> [--platform P] [--min-user-score N] [--rating R] [--threshold T]",
        description: "Recommend by genre with filters",
        group: CommandGroup::Recommend,
    },
    CommandHelp {
        name: "where",
        args: "",
        description: "Show the dataset path",
        group: CommandGroup::System,
    },
    CommandHelp {
        name: "help",
        args: "",
        description: "Show this help",
        group: CommandGroup::System,
    },
    CommandHelp {
        name: "exit",
        args: "",
        description: "Close this program",
        group: CommandGroup::System,
    },
];

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

fn checked_threshold(threshold: Option<f64>, app_config: &AppConfig) -> Result<f64, String> {
    match threshold {
        Some(t) if !t.is_finite() => Err(format!("Invalid threshold {}", t)),
        Some(t) => Ok(t),
        None => Ok(app_config.threshold),
    }
}

fn execute_command(
    line: String,
    catalog: &GameCatalog,
    app_config: &AppConfig,
) -> CommandExecutionResult {
    if line.trim().is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            cli_style::print_command_echo(&line);
            match cli.command {
                InnerCommand::Genres => {
                    cli_style::print_value_list("Genres", &catalog.distinct_genres());
                }
                InnerCommand::Platforms => {
                    cli_style::print_value_list("Platforms", &catalog.distinct_platforms());
                }
                InnerCommand::Ratings => {
                    cli_style::print_value_list("Ratings", &catalog.distinct_ratings());
                }
                InnerCommand::Genre { genre, threshold } => {
                    let threshold = match checked_threshold(threshold, app_config) {
                        Ok(t) => t,
                        Err(err) => return CommandExecutionResult::Error(err),
                    };
                    let projection = if app_config.show_sales {
                        Projection::WithSales
                    } else {
                        Projection::Basic
                    };
                    let rows = catalog.query(
                        &RecommendationQuery::genre(&genre)
                            .with_threshold(threshold)
                            .with_projection(projection),
                    );
                    cli_style::print_section_header(&format!("Recommended {} games", genre));
                    println!();
                    cli_style::print_results(&rows);
                }
                InnerCommand::Recommend {
                    genre,
                    platform,
                    min_user_score,
                    rating,
                    threshold,
                } => {
                    if !min_user_score.is_finite() {
                        return CommandExecutionResult::Error(format!(
                            "Invalid minimum user score {}",
                            min_user_score
                        ));
                    }
                    let threshold = match checked_threshold(threshold, app_config) {
                        Ok(t) => t,
                        Err(err) => return CommandExecutionResult::Error(err),
                    };
                    let rows =
                        catalog.recommend(&genre, &platform, min_user_score, &rating, threshold);
                    cli_style::print_section_header(&format!("Recommended {} games", genre));
                    println!();
                    cli_style::print_results(&rows);
                }
                InnerCommand::Stats => {
                    let scores = catalog.recommender().score_table();
                    cli_style::print_section_header("Dataset");
                    cli_style::print_key_value("Games", &catalog.get_games_count().to_string());
                    cli_style::print_key_value(
                        "Genres",
                        &catalog.distinct_genres().len().to_string(),
                    );
                    cli_style::print_key_value(
                        "Platforms",
                        &catalog.distinct_platforms().len().to_string(),
                    );
                    cli_style::print_key_value(
                        "Ratings",
                        &catalog.distinct_ratings().len().to_string(),
                    );
                    cli_style::print_key_value_highlight(
                        "Matching genre score",
                        &format!("{:.3}", scores.score(GenreMatch::Match)),
                    );
                    cli_style::print_key_value_highlight(
                        "Other genre score",
                        &format!("{:.3}", scores.score(GenreMatch::NotMatch)),
                    );
                    cli_style::print_key_value("Threshold", &app_config.threshold.to_string());
                    cli_style::print_section_footer();
                }
                InnerCommand::Where => {
                    println!("{}", app_config.dataset_path.display());
                }
                InnerCommand::Help => cli_style::print_help(COMMANDS_HELP),
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }

        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct MyHelper {
    commands_names: Vec<String>,
}

impl MyHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        MyHelper { commands_names }
    }
}

impl Completer for MyHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for MyHelper {}
impl Validator for MyHelper {}
impl Helper for MyHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        dataset_path: cli_args.path,
        ..CliConfig::default()
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;
    let catalog = load_catalog(&app_config.dataset_path, &app_config.fill_defaults)?;

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<MyHelper, FileHistory>::with_config(config)?;

    let helper = MyHelper::new();
    rl.set_helper(Some(helper));
    let _ = rl.clear_screen();

    cli_style::print_welcome(
        &app_config.dataset_path.display().to_string(),
        catalog.get_games_count(),
    );
    if catalog.get_games_count() == 0 {
        cli_style::print_warning("The dataset has no games, every recommendation will be empty.");
    }

    let prompt = cli_style::get_prompt();
    loop {
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &catalog, &app_config) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        cli_style::print_goodbye();
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        cli_style::print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                cli_style::print_error(&format!("{:?}", e));
                break;
            }
        }
        cli_style::flush();
    }
    Ok(())
}

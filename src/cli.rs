use crate::deck;
use crate::solver::Solver;
use crate::utils::validate_hand;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::thread_rng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Solve the 24 Points playing-card puzzle
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find an arithmetic expression turning four card values into 24")]
#[command(version)]
pub struct CliArgs {
    /// Four card values to solve; a random hand is dealt when omitted
    #[arg(num_args = 4, value_name = "CARD")]
    pub cards: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub cards: Vec<i64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if !args.cards.is_empty() {
        validate_hand(&args.cards).context("Invalid hand")?;
    }

    Ok(CliConfig {
        cards: args.cards,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let values = if config.cards.is_empty() {
        let mut rng = thread_rng();
        let hand = deck::deal(&mut rng);
        let labels: Vec<String> = hand.iter().map(ToString::to_string).collect();
        println!("Cards: {}", labels.join(" "));
        hand.iter().map(|card| i64::from(card.rank())).collect()
    } else {
        config.cards
    };

    info!("Solving hand {:?} for 24", values);

    let solver = Solver::new();
    match solver.solve(&values) {
        Some(solution) => {
            if solution.all_positive {
                info!("Every intermediate result stayed positive");
            }
            println!("{} = 24", solution.expression);
            Ok(())
        }
        None => {
            warn!("No expression reaches 24");
            println!("No solution.");
            Ok(())
        }
    }
}

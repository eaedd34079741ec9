use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use soroban_drills::generator::constants::{
    DEFAULT_MAX_DIVIDEND_DIGITS, DEFAULT_MIN_DIVIDEND_DIGITS,
};
use soroban_drills::{
    DivisionType, GenerationRequest, Problem, Worksheet, WorksheetSection, digit_count,
    leading_digit,
};

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

/// Soroban drills - Generate division exercises for abacus training
#[derive(Parser, Debug)]
#[command(name = "soroban-drills")]
#[command(about = "Generate unique division drills with digit constraints for soroban practice")]
#[command(version)]
pub struct CliArgs {
    /// Exercise type (type1..type5 or a formula code); all types when omitted
    #[arg(short, long)]
    pub kind: Option<DivisionType>,

    /// Number of problems per type
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// Minimum dividend digits for type 5
    #[arg(long, default_value_t = DEFAULT_MIN_DIVIDEND_DIGITS)]
    pub min_digits: u32,

    /// Maximum dividend digits for type 5
    #[arg(long, default_value_t = DEFAULT_MAX_DIVIDEND_DIGITS)]
    pub max_digits: u32,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the answer key instead of the digit facts
    #[arg(short, long)]
    pub answers: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub requests: Vec<GenerationRequest>,
    pub seed: u64,
    pub answers: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    if args.count == 0 {
        bail!("Problem count must be at least 1");
    }

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => DivisionType::ALL.to_vec(),
    };
    let requests = kinds
        .into_iter()
        .map(|kind| {
            let request = GenerationRequest::new(kind, args.count);
            match kind {
                DivisionType::AnyDigits => {
                    request.with_dividend_digits(args.min_digits, args.max_digits)
                }
                _ => request,
            }
        })
        .collect();

    Ok(CliConfig {
        requests,
        seed: args.seed.unwrap_or_else(rand::random),
        answers: args.answers,
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

/// One line of the demonstration output with the facts the type constrains
pub fn describe_problem(kind: DivisionType, problem: &Problem) -> Result<String> {
    if kind.compares_leading_digit() {
        let leading = leading_digit(problem.dividend)
            .with_context(|| format!("Invalid dividend in {:?}", problem))?;
        Ok(format!(
            "{} {} (cat: {}, mice first digit: {})",
            problem,
            problem.quotient(),
            problem.divisor,
            leading
        ))
    } else {
        Ok(format!(
            "{} {} (mice digits: {})",
            problem,
            problem.quotient(),
            digit_count(problem.dividend)
        ))
    }
}

/// Printed under a section heading when the generator ran out of distinct
/// problems; the generator itself logs the warning
pub fn shortfall_note(section: &WorksheetSection) -> Option<String> {
    if !section.is_short() {
        return None;
    }
    Some(format!(
        "(only {} of {} requested problems exist for this type)",
        section.problems.len(),
        section.requested
    ))
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Generating {} problem types with seed {}",
        config.requests.len(),
        config.seed
    );

    let worksheet =
        Worksheet::generate(&config.requests, config.seed).context("Failed to generate problems")?;

    if config.answers {
        print!("{}", worksheet.answer_key());
        return Ok(());
    }

    for section in &worksheet.sections {
        println!(
            "Type {}: {}",
            section.kind.number(),
            section.kind.description()
        );
        if let Some(note) = shortfall_note(section) {
            println!("{}", note);
        }
        for problem in &section.problems {
            println!("{}", describe_problem(section.kind, problem)?);
        }
        println!("{}", "-".repeat(30));
    }

    Ok(())
}

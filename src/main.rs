//! Command-line entry point: prints average salary tables per job board.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use job_salaries::config;
use job_salaries::report::render_report;
use job_salaries::{SalaryStats, Site};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    All,
    Headhunter,
    Superjob,
}

impl SourceArg {
    fn sites(self) -> Vec<Site> {
        match self {
            SourceArg::All => vec![Site::HeadHunter, Site::SuperJob],
            SourceArg::Headhunter => vec![Site::HeadHunter],
            SourceArg::Superjob => vec![Site::SuperJob],
        }
    }
}

#[derive(Parser)]
#[command(
    name = "job-salaries",
    about = "Average programming salaries in Moscow from HeadHunter and SuperJob",
    version
)]
struct Cli {
    /// Comma-separated languages to search for.
    #[arg(long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Which job boards to query.
    #[arg(long, value_enum, default_value_t = SourceArg::All)]
    source: SourceArg,

    /// Only count vacancies published within this many days.
    #[arg(long, default_value_t = config::DEFAULT_PERIOD_DAYS)]
    period: u32,

    /// Vacancies requested per page.
    #[arg(long, default_value_t = config::DEFAULT_PER_PAGE)]
    per_page: u32,

    /// Stop after this many pages per language.
    #[arg(long)]
    max_pages: Option<u32>,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// SuperJob application secret key.
    #[arg(long, env = config::SJ_TOKEN_ENV, hide_env_values = true)]
    sj_token: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the tables.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> job_salaries::Result<()> {
    let mut builder = SalaryStats::builder()
        .period_days(cli.period)
        .per_page(cli.per_page)
        .max_pages(cli.max_pages)
        .timeout(Duration::from_secs(cli.timeout));
    if let Some(languages) = cli.languages {
        builder = builder.languages(languages.into_iter().map(|l| l.trim().to_string()));
    }
    if let Some(token) = cli.sj_token {
        builder = builder.superjob_token(token);
    }
    let stats = builder.build()?;

    let sites = stats.collect_sites(&cli.source.sites())?;
    println!("{}\n", render_report(&sites, config::REPORT_REGION));
    Ok(())
}

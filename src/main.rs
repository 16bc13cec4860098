#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use mensa_plan::{
    fetch::date_iter, fetch_plan, Clock, HttpSource, ProviderConfig, SystemClock,
};
use url::Url;

/// Prints the cafeteria's meal plan.
///
/// Provider settings default to the `MENSA_PROVIDER_URL`, `MENSA_LOCATION`, `MENSA_LANG` and
/// `MENSA_TIMEOUT_SECS` environment variables, flags take precedence.
#[derive(Parser, Debug)]
#[command(name = "mensa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First day to show (yyyy-mm-dd), today if not given.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Number of consecutive days to show.
    #[arg(short = 'n', long, default_value_t = 1)]
    days: u32,

    /// Location id of the cafeteria.
    #[arg(short, long)]
    location: Option<u32>,

    /// Language code sent to the provider.
    #[arg(long)]
    lang: Option<String>,

    /// Provider endpoint.
    #[arg(long)]
    url: Option<Url>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the plans as json.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, mut config: ProviderConfig) -> ProviderConfig {
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(location) = self.location {
            config.location = location;
        }
        if let Some(lang) = &self.lang {
            config.lang.clone_from(lang);
        }
        if let Some(secs) = self.timeout {
            config.timeout = std::time::Duration::from_secs(secs);
        }
        config
    }
}

fn run(cli: &Cli) -> mensa_plan::Result<()> {
    let config = cli.apply(ProviderConfig::from_env()?);
    let source = HttpSource::new(config)?;
    let start = cli.date.unwrap_or_else(|| SystemClock.today());
    let plans = date_iter(start, cli.days)
        .map(|date| fetch_plan(&source, Some(date)))
        .collect::<mensa_plan::Result<Vec<_>>>()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        for plan in &plans {
            print!("{plan}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

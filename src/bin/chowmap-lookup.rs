//! Resolve restaurant addresses through the Places text search API.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use chowmap::types::TEXT_SEARCH_COST_USD;
use chowmap::{Console, Error, PlacesClient, Resolver, config, store};

/// Fill in the Address column of a parsed restaurant CSV
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the CSV produced by chowmap-parse
    #[arg(default_value = "restaurants.csv")]
    input: PathBuf,

    /// Credentials file defining GOOGLE_PLACES_API_KEY
    #[arg(long, default_value = config::DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Where to write resolved records (defaults to rewriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start looking up addresses without asking first
    #[arg(short = 'y', long)]
    assume_yes: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Args::parse()).await {
        eprintln!("{err}");
        process::exit(1);
    }
}

async fn run(args: Args) -> chowmap::Result<()> {
    let api_key = config::load_api_key(&args.env_file)?;

    if !args.input.exists() {
        return Err(Error::setup(format!(
            "input file {} not found\n\
            \n\
            Run chowmap-parse first, or pass the path to your CSV as the\n\
            first argument.",
            args.input.display()
        )));
    }
    let mut records = store::load(&args.input)?;
    let output = args.output.unwrap_or_else(|| args.input.clone());

    let pending = records.iter().filter(|r| !r.has_address()).count();
    println!(
        "Loaded {} restaurants from {} ({} without an address)",
        records.len(),
        args.input.display(),
        pending
    );

    let mut console = Console::stdio();
    if pending > 0 && !args.assume_yes {
        let ceiling = pending as f64 * TEXT_SEARCH_COST_USD;
        let question = format!("Look up {pending} addresses now (at most ${ceiling:.2})?");
        if !console.confirm(&question)? {
            println!("Nothing resolved.");
            return Ok(());
        }
    }

    let mut resolver = Resolver::new(PlacesClient::new(api_key), console);
    resolver.resolve_all(&mut records, &output).await?;
    Ok(())
}

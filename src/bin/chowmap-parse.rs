//! Parse the flat-text restaurant list into a CSV ready for address
//! lookup.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use chowmap::{Error, ListingParser, store};

/// Parse a flat-text restaurant list into CSV
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the flat-text restaurant list
    #[arg(default_value = "restaurants.txt")]
    input: PathBuf,

    /// Where to write the parsed CSV
    #[arg(short, long, default_value = "restaurants.csv")]
    output: PathBuf,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> chowmap::Result<()> {
    if !args.input.exists() {
        return Err(Error::setup(format!(
            "input file {} not found\n\
            \n\
            Write your restaurant list there (one entry per line, fields\n\
            separated by •) or pass its path as the first argument.",
            args.input.display()
        )));
    }

    let text = std::fs::read_to_string(&args.input)?;
    let records = ListingParser::new().parse_text(&text)?;
    store::save(&args.output, &records)?;

    println!(
        "Parsed {} restaurants from {} into {}",
        records.len(),
        args.input.display(),
        args.output.display()
    );
    println!("Next: chowmap-lookup {}", args.output.display());
    Ok(())
}

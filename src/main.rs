use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use perft_cmp::{CountTable, DiffTable, Error, MissingPolicy, TableFormat};

/// Compare two perft move-count tables and print the count difference for
/// every move in the first one.
#[derive(Parser)]
#[command(name = "perft-cmp", version, about = "Compare two perft move-count tables")]
struct Cli {
    /// Count table to compare, e.g. your engine's divide output
    first: PathBuf,

    /// Count table to compare against, e.g. a reference engine's divide output
    second: PathBuf,

    /// Column layout of the first table
    #[arg(long, value_enum, default_value_t = TableFormat::Standard)]
    first_format: TableFormat,

    /// Column layout of the second table
    #[arg(long, value_enum, default_value_t = TableFormat::Standard)]
    second_format: TableFormat,

    /// Skip moves missing from the second table instead of stopping at the first one
    #[arg(long)]
    best_effort: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let first = CountTable::from_file(&cli.first, cli.first_format)?;
    let second = CountTable::from_file(&cli.second, cli.second_format)?;

    let policy = if cli.best_effort {
        MissingPolicy::Skip
    } else {
        MissingPolicy::FailFast
    };
    let diff = DiffTable::diff(&first, &second, policy)?;

    info!("{} of {} moves differ", diff.mismatches(), diff.len());
    print!("{}", diff);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

//! Command-line driver for synthgen.
//!
//! Generates one example table and prints it:
//!
//! ```bash
//! # 100 rows (the default), fresh randomness each run
//! synthgen
//!
//! # 10 rows, reproducible across runs
//! synthgen --rows 10 --seed 42
//! ```

use clap::Parser;
use synthgen::{
    default_start_date, render_table, TableBuilder, DEFAULT_FLOAT_HIGH, DEFAULT_FLOAT_LOW,
    DEFAULT_INTEGER_HIGH, DEFAULT_INTEGER_LOW, DEFAULT_ROW_COUNT,
};

#[derive(Parser)]
#[command(name = "synthgen")]
#[command(about = "Generate a synthetic tabular dataset and print it")]
struct Cli {
    /// Number of rows to generate for every column
    #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
    rows: usize,

    /// RNG seed for reproducible output; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut builder = match cli.seed {
        Some(seed) => TableBuilder::with_seed(cli.rows, seed),
        None => TableBuilder::new(cli.rows),
    };

    builder.add_integer("A", DEFAULT_INTEGER_LOW, DEFAULT_INTEGER_HIGH)?;
    builder.add_integer("B", DEFAULT_INTEGER_LOW, DEFAULT_INTEGER_HIGH)?;
    builder.add_float("C", DEFAULT_FLOAT_LOW, DEFAULT_FLOAT_HIGH)?;
    builder.add_categorical("D", &["cat", "dog", "mouse"])?;
    builder.add_datetime("E", default_start_date())?;
    builder.add_boolean("F");
    builder.add_categorical("G", &["red", "blue", "green"])?;

    let table = builder.data();
    tracing::info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "generated table"
    );

    println!("{}", render_table(&table));
    println!("[{} rows x {} columns]", table.num_rows(), table.num_columns());

    Ok(())
}

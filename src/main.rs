//! songsift CLI - filter, sort and reformat the songs dataset
//!
//! ```bash
//! songsift --data_file songs.csv --order_by STREAMS --order ASC --limit 6
//! songsift --data_file songs.csv --filter ARTIST --value "Dua Lipa" \
//!          --order_by NO_SPOTIFY_PLAYLISTS --order DES
//! ```

use clap::Parser;
use songsift::models::{FilterKind, OrderBy, Parameters, SortOrder};
use songsift::transform::pipeline;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "songsift")]
#[command(about = "Filter, sort and reformat a CSV of song records", long_about = None)]
struct Cli {
    /// Path to the input CSV file
    #[arg(long = "data_file")]
    data_file: PathBuf,

    /// Filtering criteria
    #[arg(long, value_enum, requires = "value")]
    filter: Option<FilterKind>,

    /// Filter value (required when --filter is given)
    #[arg(long, requires = "filter")]
    value: Option<String>,

    /// Sorting criterion
    #[arg(long = "order_by", value_enum)]
    order_by: OrderBy,

    /// Sorting order
    #[arg(long, value_enum)]
    order: SortOrder,

    /// Maximum number of rows in the output
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,
}

impl From<Cli> for Parameters {
    fn from(cli: Cli) -> Self {
        Parameters {
            data_file: cli.data_file,
            filter: cli.filter,
            value: cli.value,
            order_by: cli.order_by,
            order: cli.order,
            limit: cli.limit.map(|n| n as usize),
        }
    }
}

fn main() {
    env_logger::init();

    let params: Parameters = Cli::parse().into();

    eprintln!("📄 Processing: {}", params.data_file.display());

    match pipeline::run(&params) {
        Ok(summary) => {
            eprintln!(
                "   Rows: {} loaded, {} after filter, {} written",
                summary.loaded, summary.filtered, summary.written
            );
            if summary.dropped_dates > 0 {
                eprintln!(
                    "   ⚠️  {} rows dropped for invalid release dates",
                    summary.dropped_dates
                );
            }
            println!("Results saved to {}", summary.output.display());
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

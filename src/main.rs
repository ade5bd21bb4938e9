//! shopkeep - builds a filtered, unit-converted shop inventory table from
//! tabular item data
//!
//! shopkeep provides:
//! - Tag-based item filtering (include/require/exclude)
//! - Denomination selection for prices and weights (e.g. "3 gp", "8 oz")
//! - A fixed-width ASCII table on the terminal
//! - Optional CSV/TXT/JSON/HTML output files

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod load;
mod render;
mod shop;

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    cli::run(cli)
}

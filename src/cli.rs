//! CLI module - command-line interface definition and the run pipeline

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::tags::TagFilter;
use crate::core::units::{
    build_table, parse_unit_spec, UnitSpec, STANDARD_CURRENCY, STANDARD_WEIGHT,
};
use crate::load::load_sources;
use crate::render::table::render_table;
use crate::render::writers;
use crate::shop::{build_shop, filter_items, ShopOptions};

/// shopkeep - build a shop inventory table from item source files.
#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(
    author,
    version,
    about,
    long_about = r#"Creates a shop with items picked by tag from the provided source files,
with prices and weights converted into the most natural denomination
(e.g. "3 gp" rather than "300 cp"). With no tag filters, every item in
the sources is used.

The ASCII table always prints to the terminal; --csv/--txt/--json/--html
additionally write the shop to files.

Examples:
    shopkeep ./DnD-5E-Items.csv ./My-Custom-Items.csv
    shopkeep -i weapons ./DnD-5E-Items.csv
    shopkeep -i armor -i weapons -i "adventuring gear" -A -W ./DnD-5E-Items.csv
    shopkeep -i weapons -x mounts -r metal -A -W ./DnD-5E-Items.csv
    shopkeep -c ep=0.5 -c bp=0.02 -i weapons -W ./DnD-5E-Items.csv
    shopkeep -N -c ep=0.5 -w kg=0.4545 -w g=0.0004545 ./DnD-5E-Items.csv
"#
)]
pub struct Cli {
    /// Source .csv files with the columns: Name, Price (gp), Weight (lb.),
    /// Category, Properties, AC, Damage, Tags, Source.
    #[arg(value_name = "SOURCE_FILES", required = true)]
    pub source_files: Vec<PathBuf>,

    /// Add a currency as LABEL=RATIO, where RATIO is the gold-piece value.
    #[arg(
        short = 'c',
        long = "currency",
        value_name = "LABEL=RATIO",
        value_parser = parse_unit_spec,
        long_help = "Add a currency as LABEL=RATIO, where RATIO is the value of one\n\
LABEL in gold pieces (e.g. -c sp=0.1, -c ep=0.5).\n\n\
Repeatable. A spec with the same label as a standard coin overrides it."
    )]
    pub currencies: Vec<UnitSpec>,

    /// Add a weight unit as LABEL=RATIO, where RATIO is the pound value.
    #[arg(
        short = 'w',
        long = "weight",
        value_name = "LABEL=RATIO",
        value_parser = parse_unit_spec,
        long_help = "Add a weight unit as LABEL=RATIO, where RATIO is the value of one\n\
LABEL in pounds (e.g. -w kg=0.4545).\n\n\
Repeatable. A spec with the same label as a standard unit overrides it."
    )]
    pub weights: Vec<UnitSpec>,

    /// Required number of significant figures when picking a denomination.
    #[arg(
        long,
        default_value_t = 1,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        long_help = "Required number of significant figures in the displayed quantity.\n\n\
1 favors denominations whose quantity lands between 1 and 9, while 2\n\
favors 10-99, and so on."
    )]
    pub sigfigs: u32,

    /// Allow zero-priced items (otherwise the minimum price is 1 of the
    /// smallest coin).
    #[arg(short = 'F', long)]
    pub free: bool,

    /// Skip the standard currency (gp/sp/cp) and weight (ton/lb./oz) sets.
    #[arg(short = 'N', long = "no-std")]
    pub no_std: bool,

    /// Keep items carrying at least one of these tags.
    #[arg(short = 'i', long = "include", value_name = "TAG")]
    pub include: Vec<String>,

    /// Keep only items carrying every one of these tags.
    #[arg(short = 'r', long = "require", value_name = "TAG")]
    pub require: Vec<String>,

    /// Drop items carrying any of these tags.
    #[arg(short = 'x', long = "exclude", value_name = "TAG")]
    pub exclude: Vec<String>,

    /// Show the AC column.
    #[arg(short = 'A', long)]
    pub armor: bool,

    /// Show the weapon Damage column.
    #[arg(short = 'W', long)]
    pub weapon: bool,

    /// Save the shop to a .csv file.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Save the shop to a tab-delimited .txt file.
    #[arg(long, value_name = "FILE")]
    pub txt: Option<PathBuf>,

    /// Save the shop as a JSON array of row objects.
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Save the shop as a styled HTML table document.
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let standard = !cli.no_std;
    let currency = build_table(standard.then(|| &*STANDARD_CURRENCY), &cli.currencies);
    let weight = build_table(standard.then(|| &*STANDARD_WEIGHT), &cli.weights);

    let items = load_sources(&cli.source_files)?;
    let filter = TagFilter::new(&cli.include, &cli.require, &cli.exclude);
    let items = filter_items(items, &filter);

    let opts = ShopOptions {
        sigfigs: cli.sigfigs,
        free: cli.free,
        armor: cli.armor,
        weapon: cli.weapon,
    };
    let shop = build_shop(&items, &currency, &weight, &opts)?;

    print!("{}", render_table(&shop));

    if let Some(path) = &cli.csv {
        writers::write_csv(&shop, path)?;
    }
    if let Some(path) = &cli.txt {
        writers::write_txt(&shop, path)?;
    }
    if let Some(path) = &cli.html {
        writers::write_html(&shop, path)?;
    }
    if let Some(path) = &cli.json {
        writers::write_json(&shop, path)?;
    }

    Ok(())
}

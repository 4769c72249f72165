use std::path::PathBuf;

/// EU choropleth map composition CLI
#[derive(clap::Parser, Debug)]
#[command(name = "eumap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Territory table JSON, defaults to the built-in EU table
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub territories: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List member states on a date
    Members(MembersArgs),

    /// Compose a map from a config, a data file and border datasets
    Compose(ComposeArgs),
}

#[derive(clap::Args, Debug)]
pub struct MembersArgs {
    /// Reference date as YYYY-MM-DD, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ComposeArgs {
    /// Map config JSON (geography, palette, theme, title)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Data JSON with `names` and `values`, overriding the config palette data
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// High resolution border GeoJSON (lon/lat)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub high: PathBuf,

    /// Low resolution border GeoJSON (lon/lat)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub low: PathBuf,

    /// Output file, defaults to "./map.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

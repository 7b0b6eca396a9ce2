use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "valwatch")]
#[clap(about = "Validation batch monitoring tool", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

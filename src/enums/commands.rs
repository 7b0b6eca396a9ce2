use clap::Subcommand;
use crate::config::constants::{DEFAULT_LOGS_PAGE, DEFAULT_LOGS_PER_PAGE};

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Watch {
        #[clap(short, long)]
        batch: i64,
    },
    Report {
        #[clap(short, long)]
        batch: i64,
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long)]
        include_files: bool,
    },
    Summary {
        #[clap(short, long)]
        batch: i64,
    },
    Logs {
        #[clap(short, long, default_value_t = DEFAULT_LOGS_PAGE)]
        page: u32,
        #[clap(long, default_value_t = DEFAULT_LOGS_PER_PAGE)]
        per_page: u32,
        #[clap(short, long)]
        search: Option<String>,
    },
    Active,
    Validate,
}

use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "qaflow")]
#[clap(about = "Code-quality reporting backend with quality-gate evaluation", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

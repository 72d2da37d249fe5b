use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zseq_tools::get::{get, GetArgs};
use zseq_tools::inspect::{inspect, InspectArgs};
use zseq_tools::set::{set, SetArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Inspect(InspectArgs),
    Get(GetArgs),
    Set(SetArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match Cli::parse_from(wild::args()) {
        Cli::Inspect(args) => inspect(&args),
        Cli::Get(args) => get(&args),
        Cli::Set(args) => set(args),
    }
}

use anyhow::Result;
use clap::Parser;
use flyer_style::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    flyer_style::init_tracing();
    flyer_style::run(cli).await
}

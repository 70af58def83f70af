use clap::Parser;
use log::info;
use topfive::{
    clients::errors::Result,
    report::{ConfigBuilder, Reporter},
};

/// Takes no arguments: every run prints both the artists and the tracks lists.
#[derive(Parser)]
#[command(name = "topfive")]
#[command(version, about = "Print your top five Spotify artists and tracks", long_about = None)]
struct Cli {}

pub async fn run() -> Result<()> {
    let _cli = Cli::parse();

    info!("Building config ...");
    let config = ConfigBuilder::new().build()?;
    let reporter = Reporter::new(config);
    reporter.run(std::io::stdout()).await
}

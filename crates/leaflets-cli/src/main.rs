mod output;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use leaflets_scraper::LeafletClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leaflets-cli")]
#[command(about = "Collect current retail leaflets into a JSON file")]
struct Cli {
    /// Output file; overrides `LEAFLETS_OUTPUT_PATH`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leaflets_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = cli.output.unwrap_or_else(|| config.output_path.clone());
    tracing::debug!(?config, output = %output.display(), "starting run");

    let client = LeafletClient::from_config(&config)?;
    pipeline::run(&client, &output, &mut std::io::stdout()).await?;
    Ok(())
}

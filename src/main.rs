use clap::Parser;

use synergai::cli::{Cli, run};
use synergai::config::{LoggingConfig, load_dotenv};
use synergai::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    load_dotenv();

    init_tracing(&LoggingConfig::from_env()?);

    run(cli).await
}

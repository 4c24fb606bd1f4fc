use color_eyre::Result;
use folio::cli::{parse_args, run_cli_command};
use folio::startup::{init_tracing, FolioConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = parse_args(std::env::args());
    let config = FolioConfig::from_env();
    tracing::debug!(?command, content_dir = %config.content_dir.display(), "starting");

    run_cli_command(command, &config).await
}

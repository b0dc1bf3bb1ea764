use clap::Parser;
use orrery_logging::OrrerySubscriberBuilder;
use orrery_server::{Cli, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    let _guard = OrrerySubscriberBuilder::new()
        .with_config(config.log.clone())
        .init();

    serve(config).await
}

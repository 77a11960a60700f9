use clap::Parser;
use examdata::{Config, run};
use examdata_fetch::ReqwestClient;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Download the exam practice datasets (sessions 10 to 5) into
/// ./public/datasets. Files that are missing upstream are skipped.
#[derive(Debug, Parser)]
#[command(name = "examdata", version, about, long_about = None)]
struct Cli {}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = Config::default();
    let client = ReqwestClient::new()?;

    let mut stdout = std::io::stdout().lock();
    run(&config, client, &mut stdout).await?;

    Ok(())
}

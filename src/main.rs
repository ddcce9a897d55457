use std::path::PathBuf;

use clap::Parser;

use hello_echo::lifecycle::startup;
use hello_echo::observability::init_logging;

#[derive(Parser)]
#[command(name = "hello-echo")]
#[command(about = "Reports server time, connection security and request headers", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address (e.g. 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;
    init_logging(&config.observability)?;

    tracing::info!("hello-echo v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = startup::serve(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

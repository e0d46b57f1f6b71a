// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the API client from the
//   environment and hand the parsed command to `cli::run`.
// - Returns `anyhow::Result` so any failure ends the process with its
//   message and a non-zero exit status.

use clap::Parser;
use growl::{api::ApiClient, cli, config::Config, service::DoggoService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    let config = Config::from_env()?;
    let service = DoggoService::new(ApiClient::new(&config)?);

    let stdout = std::io::stdout();
    cli::run(cli, &service, &mut stdout.lock())
}

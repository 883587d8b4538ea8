//! CLI entry point - the composition root.

use apikeys_cli::{Cli, CliConfig, Commands, build_client, handlers, init_tracing};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads APIKEYS_BASE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    init_tracing(&config);

    let client = build_client(&config)?;
    tracing::debug!(base_url = %client.base_url(), "API key client ready");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::List => handlers::list::execute(&client, &mut out).await?,
        Commands::Show { id } => handlers::show::execute(&client, id, &mut out).await?,
        Commands::Create {
            description,
            expires_at,
        } => handlers::create::execute(&client, description, expires_at, &mut out).await?,
        Commands::Remove { id } => handlers::remove::execute(&client, id, &mut out).await?,
    }

    Ok(())
}

//! Products API - REST server

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::hash_password;
use eyre::Result;
use tracing::info;

use products_api::{AppState, Config};

#[derive(Parser)]
#[command(name = "products-api")]
#[command(about = "Product catalog REST API backed by JSON files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print an Argon2 hash for a users.json entry
    HashPassword {
        /// Plain-text password to hash
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::HashPassword { password } => {
            let hash = hash_password(&password)?;
            println!("{}", hash);
            Ok(())
        }
    }
}

async fn serve() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    database::json::ensure_data_dir(&config.store).await?;
    info!(data_dir = %config.store.data_dir().display(), "Using JSON data directory");

    let state = AppState::new(config);
    let router = products_api::app(&state);

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    axum_helpers::create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use marriage_app_api::{
    app::{create_app, AppState},
    commands,
    config::Config,
    middleware::init_logging,
};

#[derive(Debug, Parser)]
#[command(name = "marriage-app", version, about = "Wedding guestbook and invite tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Create missing tables, then serve HTTP (default)
    Serve,
    /// Create missing tables
    InitDb,
    /// Check database connectivity
    TestDb,
    /// Make legacy invite columns nullable
    FixInvitesSchema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config.logging);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::InitDb => {
            println!("{}", commands::init_db(&config).await);
            Ok(())
        }
        Command::TestDb => {
            println!("{}", commands::test_db(&config).await);
            Ok(())
        }
        Command::FixInvitesSchema => {
            println!("{}", commands::fix_invites_schema(&config).await);
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Marriage App v{}", env!("CARGO_PKG_VERSION"));
    info!(database = %config.masked_database_url(), "Connecting to database");

    let pool = persistence::db::create_pool(&config.pool_config()).await?;
    persistence::schema::init_schema(&pool).await?;

    let addr = config.socket_addr()?;
    let app = create_app(AppState::with_pool(config, pool));

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

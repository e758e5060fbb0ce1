/// Roster Server - users CRUD over HTTP
use clap::{Parser, Subcommand};
use roster_core::{PageRequest, Pagination, UserStore};
use roster_server::{config::ServerConfig, create_router, state::AppState};
use roster_storage::SqliteUserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Users CRUD service backed by SQLite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print one page of users
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
        /// Page number (values below 1 mean 1)
        #[arg(long)]
        page: Option<String>,
        /// Page size (values below 1 mean 10)
        #[arg(long)]
        limit: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::ListUsers {
            config,
            page,
            limit,
        } => {
            list_users(config.as_deref(), page.as_deref(), limit.as_deref()).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    let pool = roster_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    roster_storage::ensure_schema(&pool).await?;

    Ok(SqliteUserStore::new(pool))
}

async fn serve(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Database: {}", config.storage.database_url);
    tracing::info!("Error mode: {:?}", config.errors.mode);

    // Any failure opening the database or creating the table is fatal
    let store = open_store(&config).await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::new(store), config.errors.mode);
    let app = create_router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn list_users(
    config_path: Option<&std::path::Path>,
    page: Option<&str>,
    limit: Option<&str>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;
    let store = open_store(&config).await?;

    let request = PageRequest::parse(page, limit);
    let total = store.count_users().await?;
    let users = store.list_users(&request).await?;
    let pagination = Pagination::new(&request, total);

    println!(
        "Users (page {} of {}, {} total):",
        pagination.page, pagination.page_count, pagination.total
    );
    for user in users {
        println!("  {} - {} ({})", user.id, user.name, user.age);
    }

    Ok(())
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use hound_auth::SigningKey;
use hound_client::HoundClient;
use hound_server::{AppState, build_router, config, observability};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "hound-relay", version, about = "Houndify telephony relay")]
struct Cli {
    /// Config file (defaults to ./hound-relay.toml when present)
    #[arg(long, global = true, env = "HOUND_RELAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server.
    Serve,

    /// Sign a token with the configured client key and print the signature.
    Sign {
        #[arg(long, default_value = "")]
        token: String,
    },

    /// Send one text query and print the backend response.
    Query {
        text: String,

        /// User id for the request (defaults to request_info.user_id)
        #[arg(long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config)?;

    match cli.cmd {
        Command::Serve => {
            let state = Arc::new(AppState::init(&cfg)?);
            let app = build_router(state);

            let listener = tokio::net::TcpListener::bind(&cfg.server.bind)
                .await
                .with_context(|| format!("failed to bind {}", cfg.server.bind))?;
            tracing::info!("hound-relay listening on {}", cfg.server.bind);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Command::Sign { token } => {
            let credential = cfg.credentials.resolve()?;
            let key = SigningKey::from_credential(&credential)
                .map_err(|e| anyhow::anyhow!("invalid client key: {e}"))?;
            println!("{}", key.sign(&token));
        }
        Command::Query { text, user } => {
            let credential = cfg.credentials.resolve()?;
            let client = HoundClient::new(&credential, &cfg.backend, cfg.request_info.clone())?;
            let response = client.query(&text, user.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rendezvous::server::{LobbyConfig, serve};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rendezvous")]
#[command(about = "Room directory and WebRTC signaling relay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the lobby server.
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        #[arg(short, long, env = "PORT", default_value_t = 8080)]
        port: u16,

        /// Seconds without a heartbeat before a room is dropped.
        #[arg(
            long,
            env = "HEARTBEAT_TIMEOUT_SECS",
            default_value_t = 30,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        heartbeat_timeout_secs: u64,

        /// Seconds between liveness sweeps.
        #[arg(
            long,
            env = "CLEANUP_INTERVAL_SECS",
            default_value_t = 10,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        cleanup_interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Serve {
            host,
            port,
            heartbeat_timeout_secs,
            cleanup_interval_secs,
        } => {
            let config = LobbyConfig::default()
                .heartbeat_timeout(Duration::from_secs(heartbeat_timeout_secs))
                .cleanup_interval(Duration::from_secs(cleanup_interval_secs));

            let addr = SocketAddr::new(host, port);
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;

            println!("{}", "🚀 Starting rendezvous server...".green().bold());
            println!("   📡 HTTP:      http://{}", addr);
            println!("   🔌 WebSocket: ws://{}/rooms (alias /ws/rooms)", addr);
            println!(
                "   ⏱  Heartbeat timeout {}s, sweep every {}s",
                heartbeat_timeout_secs.to_string().cyan(),
                cleanup_interval_secs.to_string().cyan()
            );

            serve(listener, config).await?;
        }
    }

    Ok(())
}

//! Pingpong CLI - call the `/ping` endpoint from the command line

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pingpong_client::{config::DEFAULT_HOST, ClientError, Configuration, PingClient, PingRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pingpong")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Service base URL
    #[arg(long, global = true, env = "PINGPONG_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Print the response as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Request body fields
#[derive(Args)]
struct Body {
    /// Value of the `ping` field
    #[arg(long, default_value = "ping")]
    ping: String,

    /// Value of the `pong` field
    #[arg(long, default_value = "pong")]
    pong: String,
}

impl From<Body> for PingRequest {
    fn from(body: Body) -> Self {
        PingRequest::new(body.ping, body.pong)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Send GET /ping
    Get,

    /// Send POST /ping with a request body
    Post(Body),

    /// Send PUT /ping with a request body
    Put(Body),

    /// Send DELETE /ping with a request body
    Delete(Body),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "pingpong=debug,pingpong_client=debug"
    } else {
        "pingpong=info,pingpong_client=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = PingClient::new(Configuration::new(cli.host));
    tracing::debug!("Using host {}", client.config().host);

    let result = match cli.command {
        Commands::Get => client.get_ping().await,
        Commands::Post(body) => client.post_ping(&body.into()).await,
        Commands::Put(body) => client.put_ping(&body.into()).await,
        Commands::Delete(body) => client.delete_ping(&body.into()).await,
    };

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            if let Some(detail) = err.validation_detail() {
                for e in &detail.detail {
                    tracing::error!(loc = ?e.loc, kind = %e.kind, "{}", e.msg);
                }
            }
            return Err(report(err));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("ping: {}", response.ping);
        println!("pong: {}", response.pong);
    }

    Ok(())
}

fn report(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Transport(e) if e.is_connect() => {
            anyhow::anyhow!("Could not connect to service: {}", e)
        }
        other => other.into(),
    }
}

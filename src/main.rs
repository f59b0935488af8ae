use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use meeting_translator::server::{self, AppState};
use meeting_translator::{PhraseTable, Translator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

const DEFAULT_BIND: &str = "127.0.0.1:5011";

#[derive(Parser, Debug)]
#[command(name = "meeting-translator")]
#[command(about = "Decodes corporate speak into what people actually mean")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default)
    Serve(ServeArgs),
    /// Translate text once and print the result as JSON
    Translate(TranslateArgs),
    /// Print the known phrases as JSON
    Phrases,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Seed every request's RNG for reproducible translations
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.parse().expect("default bind address is valid"),
            seed: None,
            no_banner: false,
        }
    }
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Text to translate; read from stdin when neither this nor --file is given
    text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Seed the RNG for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout stays clean JSON for translate/phrases
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    info!(?cli, "Parsed CLI arguments");

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => run_server(args).await,
        Command::Translate(args) => run_translate(args).await,
        Command::Phrases => print_phrases(),
    }
}

async fn run_server(args: ServeArgs) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    let local_addr = listener.local_addr()?;

    if !args.no_banner {
        println!("\n{}", "=".repeat(50));
        println!("  Meeting Translator v{}", env!("CARGO_PKG_VERSION"));
        println!("{}", "=".repeat(50));
        println!("\n  Decoding corporate speak at: http://{local_addr}");
        println!("  Press Ctrl+C to stop\n");
    }

    server::serve(listener, AppState::new(args.seed), shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let translation = Translator::global().translate(&text, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&translation)?);
    Ok(())
}

fn print_phrases() -> Result<()> {
    let table = PhraseTable::global();
    let body = json!({ "phrases": table.entries() });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

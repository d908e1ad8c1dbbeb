use clap::Parser;
use ollama_rsync::config::Config;
use ollama_rsync::error::Result;
use ollama_rsync::modelfile::OllamaExporter;
use ollama_rsync::remote::RemoteServer;
use ollama_rsync::store::ModelStore;
use ollama_rsync::{run_sync, SyncJob};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ollama-rsync")]
#[command(about = "Copy local Ollama models to a remote instance", long_about = None)]
struct Cli {
    /// Source local model to copy eg. mistral:latest
    local_model: String,

    /// Remote ollama server eg. http://192.168.0.100:11434
    remote_server: String,

    /// Ollama executable used to export the Modelfile
    #[arg(long, value_name = "PATH")]
    ollama: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for user-facing output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::select! {
        result = run(cli) => {
            if let Err(e) = result {
                tracing::debug!("Fatal: {e:?}");
                println!("{}: {e}", e.prefix());
                std::process::exit(1);
            }
        }
        interrupted = tokio::signal::ctrl_c() => {
            if let Err(e) = interrupted {
                tracing::error!("Failed to listen for interrupt: {e}");
            }
            println!("\n\nModel upload aborted, exiting");
            std::process::exit(0);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let store = ModelStore::new(config.store_root()?);
    let remote = RemoteServer::parse(&cli.remote_server)?;

    let program = cli.ollama.unwrap_or(config.exporter.program);
    let exporter = OllamaExporter::new(program);

    let job = SyncJob::new(cli.local_model, remote, store);
    run_sync(&job, &exporter).await.map(|_| ())
}

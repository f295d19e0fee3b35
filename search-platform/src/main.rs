use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use search_platform::{Dependencies, IndexingError, PlatformConfig};
use search_platform_shared::{IndexDocument, StaticProvider};

#[derive(Parser)]
#[command(name = "search-platform")]
#[command(about = "Manage the global search index and push documents to it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the global index and ingest pipeline if they are missing
    Init,
    /// Delete the ingest pipeline and the global index
    Reset,
    /// Index, update or remove a document read from a JSON file
    Index {
        /// Path to the document JSON
        file: PathBuf,

        /// Display name of the document's provider
        #[arg(long)]
        provider_name: Option<String>,
    },
    /// Check that the search engine is reachable and healthy
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(command: Commands) -> Result<(), IndexingError> {
    let config = PlatformConfig::from_env();
    let deps = Dependencies::new(&config)?;

    match command {
        Commands::Init => {
            deps.service.initialize_index(deps.client.as_ref()).await?;
            info!(index = %config.index_name, "Index ready");
        }
        Commands::Reset => {
            deps.service.remove_index(deps.client.as_ref()).await?;
            info!(index = %config.index_name, "Index removed");
        }
        Commands::Index {
            file,
            provider_name,
        } => {
            let raw = fs::read_to_string(&file)?;
            let mut document: IndexDocument = serde_json::from_str(&raw)?;
            let provider = StaticProvider::new(
                document.provider_id.clone(),
                provider_name.unwrap_or_else(|| document.provider_id.clone()),
            );

            deps.service
                .index_and_reconcile(deps.client.as_ref(), &provider, &mut document)
                .await?;

            info!(
                document = %document.id,
                status = ?document.index().status(),
                "Document processed"
            );
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Commands::Health => {
            deps.verify_connection().await?;
            println!("ok");
        }
    }

    Ok(())
}

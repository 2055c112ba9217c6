mod doctor_cmd;
mod verify_cmd;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use lendforge_config::GatewaySettings;

#[derive(Parser)]
#[command(name = "lendforge")]
#[command(about = "LendForge — loan-application intake backend")]
#[command(version)]
struct Cli {
    /// Path to lendforge.yaml (default: ~/.lendforge/lendforge.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway HTTP server
    Serve {
        /// Port to bind (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a one-shot document verification from the command line
    Verify {
        /// Applicant name as entered on the application form
        #[arg(long)]
        name: String,
        /// Claimed total loan amount
        #[arg(long)]
        amount: String,
        /// Path to the loan document image
        #[arg(long)]
        image: PathBuf,
    },
    /// Check config, OCR bindings, and gateway reachability
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            logging::init_logger(Some(Path::new("logs")), "info");
            let mut config = lendforge_config::load(cli.config.as_deref())?;
            if let Some(port) = port {
                config
                    .gateway
                    .get_or_insert_with(GatewaySettings::default)
                    .port = Some(port);
            }
            lendforge_gateway::serve(&config).await
        }
        Commands::Verify {
            name,
            amount,
            image,
        } => {
            logging::init_logger(None, "warn");
            let config = lendforge_config::load(cli.config.as_deref())?;
            let verified = verify_cmd::run(&config, &name, &amount, &image).await?;
            if !verified {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Doctor => {
            logging::init_logger(None, "warn");
            let config = lendforge_config::load(cli.config.as_deref())?;
            doctor_cmd::run(&config).await
        }
    }
}

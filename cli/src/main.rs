use clap::{Parser, Subcommand};

mod convert;
mod error;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "kagi")]
#[command(about = "RSA PEM (PKCS#1) to JWK converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PKCS#1 PEM key to a JWK
    Convert {
        #[command(flatten)]
        config: convert::Config,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { config } => {
            convert::execute(config)?;
        }
    }

    Ok(())
}

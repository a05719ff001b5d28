use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use estemplate::cli::{self, OperatorsArgs, TableFormat};

#[derive(Parser)]
#[command(name = "estemplate")]
#[command(about = "Inspect ESTree template builder output")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a serialized template tree (JSON) to JavaScript
    Render {
        /// Input tree JSON file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the operator type table
    Operators {
        /// Operator table JSON file (defaults to the built-in table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TableFormat::Text)]
        format: TableFormat,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output } => {
            cli::render::render(&input, output.as_deref()).map_err(|e| miette!("{}", e))
        }
        Commands::Operators { table, format } => {
            let args = OperatorsArgs {
                table_path: table,
                format,
            };
            cli::operators::operators(&args).map_err(|e| miette!("{}", e))
        }
    }
}

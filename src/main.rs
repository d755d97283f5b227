use clap::{Parser, Subcommand};
use combogen::cli;
use combogen::error::ComboResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "combogen")]
#[command(about = "Display-parameter combination matrix with progress checkboxes")]
#[command(long_about = "combogen - Display-parameter combination matrix generator

Enumerates every resolution × frame rate × lane count × color depth
combination into one .xlsx sheet. Rows are shaded by resolution and each
row carries an unchecked checkbox for manual progress tracking.

COMMANDS:
  generate     - Write the combination workbook
  list         - Print the combinations to the terminal
  init-config  - Dump the built-in matrix as an editable YAML config
  progress     - Count ticked checkboxes in a generated workbook

EXAMPLES:
  combogen generate                          # video_combinations_interactive.xlsx
  combogen generate -o matrix.xlsx -c my_matrix.yaml
  combogen init-config my_matrix.yaml
  combogen progress video_combinations_interactive.xlsx

LOGGING:
  -v enables debug logs on stderr; RUST_LOG overrides the filter.")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the combination workbook
    Generate {
        /// Output Excel file path (.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file overriding the built-in dimensions
        #[arg(short, long, env = "COMBOGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Worksheet name
        #[arg(long)]
        sheet_name: Option<String>,
    },

    /// Print the combinations to the terminal
    List {
        /// YAML file overriding the built-in dimensions
        #[arg(short, long, env = "COMBOGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in matrix as a YAML config (stdout if no path)
    InitConfig {
        /// Where to write the config file
        output: Option<PathBuf>,
    },

    #[command(long_about = "Count ticked checkboxes in a generated workbook.

Open the workbook produced by 'generate', tick rows as they are done, save,
then run this command to see how many combinations remain.

EXAMPLE:
  combogen progress video_combinations_interactive.xlsx")]
    /// Report completion of a generated workbook
    Progress {
        /// Path to the generated .xlsx file
        file: PathBuf,

        /// YAML file the workbook was generated from (supplies the sheet name)
        #[arg(short, long, env = "COMBOGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Worksheet holding the combinations [default: from config, else Combinations]
        #[arg(long)]
        sheet_name: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "combogen=debug" } else { "combogen=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() -> ComboResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            output,
            config,
            sheet_name,
        } => cli::generate(output, config, sheet_name, cli.verbose),

        Commands::List { config, json } => cli::list(config, json),

        Commands::InitConfig { output } => cli::init_config(output),

        Commands::Progress {
            file,
            config,
            sheet_name,
        } => cli::progress(file, config, sheet_name),
    }
}

mod commands;
mod helpers;

use clap::Parser;
use fresco_core::domain::FrescoError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_fresco_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            if let Some(summary_line) = diagnostic.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("fresco-input".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_tracing(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "fresco-input",
    version,
    about = "Parse, categorize and generate FRESCO namelist input files"
)]
struct Cli {
    /// Increase log detail on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Parse an input file and print its namelist blocks
    Parse(commands::ParseArgs),
    /// Generate a complete input file from a config, an input file and overrides
    Generate(commands::GenerateArgs),
    /// List registered parameters by category
    Params(commands::ParamsArgs),
    /// Print the default &POT sequence for a reaction type
    Potentials(commands::PotentialsArgs),
    /// Show the general/advanced split, optionally after an upload and moves
    Categorize(commands::CategorizeArgs),
    /// List the SHAPE options for a potential TYPE
    Shapes(commands::ShapesArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Parse(args) => commands::run_parse_command(args),
        CliCommand::Generate(args) => commands::run_generate_command(args),
        CliCommand::Params(args) => commands::run_params_command(args),
        CliCommand::Potentials(args) => commands::run_potentials_command(args),
        CliCommand::Categorize(args) => commands::run_categorize_command(args),
        CliCommand::Shapes(args) => commands::run_shapes_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(FrescoError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_fresco_error(&self) -> FrescoError {
        match self {
            Self::Usage(message) => {
                FrescoError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => FrescoError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

mod schema_file;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use optline_core::{CommandLine, OptionSchema};
use tracing::{debug, info};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Text,
}

/// Accessor used by the `get` subcommand.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Accessor {
    /// Value of the most recent occurrence.
    Value,
    /// Every value, one per line.
    All,
    /// Most recent value as a range-checked signed integer.
    Int,
    /// Most recent value as a range-checked unsigned integer.
    Unsigned,
    /// Token position of the most recent occurrence.
    Index,
    /// `true` or `false` depending on whether the option occurred.
    Specified,
}

#[derive(Debug, Parser)]
#[command(name = "optline")]
#[command(about = "Check command lines against option schemas")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. warn, debug, optline_core=trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a command line and print the recognized options and arguments.
    Parse(ParseArgs),
    /// Print a single option accessor for a parsed command line.
    Get(GetArgs),
    /// Print the help listing for a schema.
    Help(HelpArgs),
    /// Validate one or more schema files.
    Validate(ValidateArgs),
    /// Rewrite a schema file in another format (by output extension).
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Schema file (.yaml, .yml or .json).
    #[arg(long)]
    schema: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Tokens to parse; the first one is the program path.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Schema file (.yaml, .yml or .json).
    #[arg(long)]
    schema: PathBuf,
    /// Option to look up (e.g. --jobs).
    #[arg(long, allow_hyphen_values = true)]
    option: String,
    /// How to read the option.
    #[arg(long = "as", default_value = "value")]
    accessor: Accessor,
    /// Inclusive lower bound for int/unsigned.
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,
    /// Inclusive upper bound for int/unsigned.
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,
    /// Tokens to parse; the first one is the program path.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Schema file (.yaml, .yml or .json).
    #[arg(long)]
    schema: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema files to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Source schema file.
    input: PathBuf,
    /// Destination schema file; its extension selects the format.
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Get(args) => run_get(args),
        Command::Help(args) => run_help(args),
        Command::Validate(args) => run_validate(args),
        Command::Convert(args) => run_convert(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn load_schema(path: &Path) -> Result<OptionSchema, String> {
    schema_file::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    let command_line = CommandLine::parse(args.tokens, &schema).map_err(|e| e.to_string())?;
    info!(
        program = command_line.program(),
        options = command_line.options().len(),
        "parsed command line"
    );

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&command_line)
            .map_err(|e| format!("JSON serialization failed: {e}"))?,
        OutputFormat::Yaml => serde_yaml::to_string(&command_line)
            .map_err(|e| format!("YAML serialization failed: {e}"))?,
        OutputFormat::Text => command_line.to_string(),
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn run_get(args: GetArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    let command_line = CommandLine::parse(args.tokens, &schema).map_err(|e| e.to_string())?;
    let option = args.option.as_str();
    debug!(option, accessor = ?args.accessor, "reading option");

    let output = match args.accessor {
        Accessor::Value => command_line
            .option_value(option)
            .map(str::to_string)
            .map_err(|e| e.to_string())?,
        Accessor::All => command_line
            .option_values(option)
            .map(|values| values.join("\n"))
            .map_err(|e| e.to_string())?,
        Accessor::Int => {
            let min = parse_bound("--min", args.min.as_deref(), i32::MIN)?;
            let max = parse_bound("--max", args.max.as_deref(), i32::MAX)?;
            check_range(min, max)?;
            command_line
                .option_value_as_int(option, min, max)
                .map_err(|e| e.to_string())?
                .to_string()
        }
        Accessor::Unsigned => {
            let min = parse_bound("--min", args.min.as_deref(), u64::MIN)?;
            let max = parse_bound("--max", args.max.as_deref(), u64::MAX)?;
            check_range(min, max)?;
            command_line
                .option_value_as_unsigned(option, min, max)
                .map_err(|e| e.to_string())?
                .to_string()
        }
        Accessor::Index => command_line
            .option_last_index(option)
            .map_err(|e| e.to_string())?
            .to_string(),
        Accessor::Specified => command_line.specified_option(option).to_string(),
    };

    println!("{output}");
    Ok(())
}

fn run_help(args: HelpArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    print!("{}", schema.render_help());
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut flags = 0usize;
    for path in &args.inputs {
        flags += load_schema(path)?.len();
    }
    println!(
        "Validated {} schema file(s) declaring {flags} option(s).",
        args.inputs.len()
    );
    Ok(())
}

fn run_convert(args: ConvertArgs) -> Result<(), String> {
    let schema = load_schema(&args.input)?;
    schema_file::save(&schema, &args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    println!(
        "Wrote {} option(s) to '{}'.",
        schema.len(),
        args.output.display()
    );
    Ok(())
}

fn parse_bound<T: std::str::FromStr>(name: &str, raw: Option<&str>, default: T) -> Result<T, String> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("{name} value \"{raw}\" is not a valid integer")),
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(min: T, max: T) -> Result<(), String> {
    if min > max {
        return Err(format!("--min {min} is greater than --max {max}"));
    }
    Ok(())
}

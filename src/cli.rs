//! Command-line interface implementation for Sprout.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout: project scaffolding with per-directory hooks", long_about = None)]
pub struct Args {
    /// Path to the template directory or git repository URL
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory where the project will be generated [default: current directory]
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Template data as KEY=VALUE; VALUE is parsed as JSON when possible
    #[arg(short, long = "data", value_name = "KEY=VALUE")]
    pub data: Vec<String>,

    /// JSON or YAML file with template data
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Read template data as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Indentation of generated JSON files: a number of spaces, "tab", or a literal string
    #[arg(long, value_name = "INDENT", default_value = "tab")]
    pub json_indent: String,

    /// Skip confirmation prompts when executing hooks.
    /// This will automatically execute any hook modules found in the template
    /// without asking for confirmation first.
    #[arg(long)]
    pub skip_hooks_check: bool,

    /// Initialize a git repository in the output directory after generation
    #[arg(long)]
    pub init_git: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

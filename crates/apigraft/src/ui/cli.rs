use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "apigraft")]
#[command(author, version, about = "Typed API client generator for OpenAPI v3 descriptions")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme for color selection
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an API description without generating code
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },

  /// Generate a client from an API description
  Generate(GenerateCommand),
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// Show every operation with its method, path, and return types
  Operations {
    /// Path to the OpenAPI JSON or YAML description
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI JSON or YAML description
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Client skeleton to augment, instead of the bundled one
  #[arg(short, long, value_name = "FILE")]
  pub skeleton: Option<PathBuf>,

  /// Path the generated client is written to
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Homepage linked from the generated doc block (defaults to the description's contact URL)
  #[arg(long, value_name = "URL")]
  pub homepage: Option<String>,

  /// Author recorded in the generated doc block (defaults to the description's contact name)
  #[arg(long, value_name = "NAME")]
  pub author: Option<String>,

  /// Enable verbose output with per-method detail
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress all output except errors
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

use std::{path::PathBuf, time::Instant};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::orchestrator::{GenerationStats, GeneratorOptions, Orchestrator},
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

/// Skeleton shipped with the binary, used when `--skeleton` is not given.
const BUNDLED_SKELETON: &str = include_str!("../../../skeleton/client.rs");

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Resolved inputs for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub skeleton: Option<PathBuf>,
  pub output: PathBuf,
  pub homepage: Option<String>,
  pub author: Option<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  #[must_use]
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      skeleton,
      output,
      homepage,
      author,
      verbose,
      quiet,
    } = command;
    Self {
      input,
      skeleton,
      output,
      homepage,
      author,
      verbose,
      quiet,
    }
  }

  fn options(&self) -> GeneratorOptions {
    GeneratorOptions {
      homepage: self.homepage.clone(),
      author: self.author.clone(),
    }
  }

  async fn load_spec(&self) -> anyhow::Result<oas3::Spec> {
    SpecLoader::open(&self.input).await?.parse()
  }

  async fn load_skeleton(&self) -> anyhow::Result<String> {
    match &self.skeleton {
      Some(path) => Ok(tokio::fs::read_to_string(path).await?),
      None => Ok(BUNDLED_SKELETON.to_string()),
    }
  }

  /// Writes the fully rendered client in one pass, creating parent
  /// directories as needed. Nothing touches the output path before this.
  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code).await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  const fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if self.config.quiet {
      return;
    }
    println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
  }

  fn stat(&self, label: &str, value: &str) {
    if self.config.quiet {
      return;
    }
    println!(
      "            {} {}",
      format!("{label:<25}").with(self.colors.label()),
      value.with(self.colors.value())
    );
  }

  fn log_loading(&self) {
    self.info(&format!(
      "Loading API description from: {}",
      self.config.input.display().to_string().with(self.colors.primary())
    ));
  }

  fn log_generating(&self) {
    self.info("Generating client...");
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Methods generated:", &stats.methods_generated.to_string());
    if stats.unions_generated > 0 {
      self.stat("Union enums:", &stats.unions_generated.to_string());
    }
    self.stat(
      "Imports resolved:",
      &format!("{} shared, {} local", stats.shared_imports, stats.local_imports),
    );
    if self.config.verbose && !self.config.quiet {
      for name in &stats.method_names {
        println!("            {}", format!("fn {name}").with(self.colors.info()));
      }
    }
  }

  fn log_writing(&self) {
    self.info(&format!(
      "Writing to: {}",
      self.config.output.display().to_string().with(self.colors.primary())
    ));
  }

  fn log_success(&self, elapsed: std::time::Duration) {
    if self.config.quiet {
      return;
    }
    println!();
    println!(
      "{} {}",
      format_timestamp().with(self.colors.timestamp()),
      format!("Successfully generated client in {} ms", elapsed.as_millis())
        .with(self.colors.success())
    );
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);
  let started = Instant::now();

  logger.log_loading();
  let spec = config.load_spec().await?;
  let skeleton = config.load_skeleton().await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(spec, config.options());
  let source = config.input.display().to_string();
  let (code, stats) = orchestrator.generate_with_header(&skeleton, &source)?;

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success(started.elapsed());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::{GenerateCommand, GenerateConfig};

  fn config_for(output: std::path::PathBuf) -> GenerateConfig {
    GenerateConfig {
      input: "unused.json".into(),
      skeleton: None,
      output,
      homepage: None,
      author: None,
      verbose: false,
      quiet: true,
    }
  }

  #[test]
  fn from_command_carries_every_field() {
    let config = GenerateConfig::from_command(GenerateCommand {
      input: "api.yaml".into(),
      skeleton: Some("skeleton.rs".into()),
      output: "out/client.rs".into(),
      homepage: Some("https://example.com".into()),
      author: Some("Device Cloud".into()),
      verbose: true,
      quiet: false,
    });
    assert_eq!(config.input, std::path::PathBuf::from("api.yaml"));
    assert_eq!(config.skeleton, Some(std::path::PathBuf::from("skeleton.rs")));
    assert_eq!(config.output, std::path::PathBuf::from("out/client.rs"));
    assert_eq!(config.homepage.as_deref(), Some("https://example.com"));
    assert_eq!(config.author.as_deref(), Some("Device Cloud"));
    assert!(config.verbose);
    assert!(!config.quiet);
  }

  #[tokio::test]
  async fn write_output_creates_missing_parents() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path().join("nested/out/client.rs"));
    config.write_output(String::from("// generated\n")).await.unwrap();
    let written = tokio::fs::read_to_string(&config.output).await.unwrap();
    assert_eq!(written, "// generated\n");
  }

  #[tokio::test]
  async fn bundled_skeleton_is_used_when_none_is_given() {
    let config = config_for("unused.rs".into());
    let skeleton = config.load_skeleton().await.unwrap();
    assert!(skeleton.contains("pub struct Client"));
    assert!(skeleton.contains("API_VERSION"));
  }
}

//! `staffdir` — command-line client for the employee directory.
//!
//! # Usage
//!
//! ```
//! staffdir --endpoint https://example.com/v3/b/demo list
//! staffdir --config ~/.config/staffdir/config.toml show MQ
//! ```
//!
//! `list` prints one line per employee with its URL token; `show` takes a
//! token back and displays that employee.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use staffdir_client::{ClientConfig, DirectoryClient, token};
use staffdir_core::employee::Employee;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "staffdir", about = "Command-line client for the employee directory")]
struct Args {
  /// Path to a TOML config file (endpoint).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// URL of the employee-directory endpoint.
  #[arg(long, env = "STAFFDIR_ENDPOINT")]
  endpoint: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every employee in the directory.
  List,
  /// Show one employee by its URL token (as printed by `list`).
  Show { token: String },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  endpoint: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag (or env) overrides config file.
  let endpoint = args
    .endpoint
    .or_else(|| (!file_cfg.endpoint.is_empty()).then(|| file_cfg.endpoint.clone()))
    .ok_or_else(|| anyhow!("no endpoint configured; pass --endpoint or a config file"))?;

  let client = DirectoryClient::new(ClientConfig { endpoint })?;

  match args.command {
    Command::List => list(&client).await,
    Command::Show { token } => show(&client, &token).await,
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn list(client: &DirectoryClient) -> Result<()> {
  let employees = client.fetch_all().await?;

  println!("{:<16} {:<28} {}", "TOKEN", "NAME", "OCCUPATION");
  for employee in &employees {
    let token = employee
      .id
      .as_deref()
      .map(token::encode_id)
      .unwrap_or_default();
    let marker = if employee.is_valid() { "" } else { "  (incomplete)" };
    println!(
      "{:<16} {:<28} {}{}",
      token,
      employee.full_name(),
      employee.occupation.as_deref().unwrap_or("-"),
      marker
    );
  }
  Ok(())
}

async fn show(client: &DirectoryClient, raw_token: &str) -> Result<()> {
  // Router boundary: token in, raw identifier out.
  let id = token::decode_id(raw_token)?;
  let employee = client.fetch_one(&id).await?;
  print_employee(&employee);
  Ok(())
}

fn print_employee(employee: &Employee) {
  let field = |label: &str, value: &Option<String>| {
    println!("{label:<18} {}", value.as_deref().unwrap_or("-"));
  };
  field("Id", &employee.id);
  field("First name", &employee.first_name);
  field("Last name", &employee.last_name);
  field("Gender", &employee.gender);
  field("Occupation", &employee.occupation);
  field("Date of birth", &employee.date_of_birth);
  field("Employment date", &employee.employment_date);
  field("Termination date", &employee.termination_date);
  if !employee.is_valid() {
    println!();
    println!("note: record is incomplete (missing name or occupation)");
  }
}

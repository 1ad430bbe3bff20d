//! tf-matrix
//!
//! CI helper that classifies changed Terraform paths into environment tiers
//! and appends the tier -> backend-directory matrix to the GitHub Actions
//! output file.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use tf_matrix::classify::group_by_tier;
use tf_matrix::cli::Cli;
use tf_matrix::config::InfraTypes;
use tf_matrix::output::write_github_output;
use tf_matrix::patterns::TierPatterns;
use tf_matrix::settings::Settings;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env(&cli);
    init_logging(&cli.log, settings.log_level)?;

    let infra = InfraTypes::load(&settings.config_path)?;
    let patterns = TierPatterns::build(&infra)?;
    let grouping = group_by_tier(&settings.changed_paths, &patterns, &settings.repo_root);
    write_github_output(&grouping, settings.output_path.as_deref())?;

    Ok(())
}

/// Initialize logging for the chosen destination at the resolved level.
fn init_logging(destination: &str, level: Level) -> Result<()> {
    match destination {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

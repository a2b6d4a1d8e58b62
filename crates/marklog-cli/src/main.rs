mod cli;
mod commands;
mod display;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use marklog_config::Config;
use marklog_engine::CategoryVocabulary;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_or_default(&config_path)?;
    log::debug!("Using config {}", config_path.display());

    let session = Session {
        log_file: cli.log_file.clone().unwrap_or(config.log_file),
        vocabulary: if config.categories.is_empty() {
            CategoryVocabulary::default()
        } else {
            CategoryVocabulary::new(&config.categories)
        },
        output: cli.output,
    };

    let now = Local::now().naive_local();
    let output = match cli.command.unwrap_or(Commands::Summary) {
        Commands::Add { category, message } => session.add(&category, &message, now)?,
        Commands::Review {
            supplement,
            reference,
        } => session.review(supplement.as_deref(), reference.as_deref(), now.time())?,
        Commands::List => session.list()?,
        Commands::Summary => session.summary()?,
        Commands::Group { by } => session.group(by)?,
        Commands::Header { path, body } => {
            session.header(&path.unwrap_or(config.skills_path), body)?
        }
    };
    print!("{output}");

    Ok(())
}

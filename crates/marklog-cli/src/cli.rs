use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use marklog_engine::Granularity;

#[derive(Parser)]
#[command(name = "marklog")]
#[command(author, version, about = "Learning log and skill frontmatter tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the learning log (default: log_file from config)
    #[arg(long, global = true, env = "MARKLOG_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Path to config.toml (default: ~/.config/marklog/config.toml)
    #[arg(long, global = true, env = "MARKLOG_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a new entry to the learning log
    Add {
        /// Entry category (must be one of the configured categories)
        category: String,
        /// Entry text
        message: String,
    },

    /// Show the latest entry and optionally attach a supplement to it
    Review {
        /// Supplement text to append
        #[arg(long)]
        supplement: Option<String>,

        /// Reference material quoted under the supplement
        #[arg(long, requires = "supplement")]
        reference: Option<String>,
    },

    /// List all entries in file order
    List,

    /// Show entry count, time span and per-category counts
    Summary,

    /// Group entries by category or time period
    Group {
        #[arg(long, value_enum)]
        by: GroupBy,
    },

    /// Print the frontmatter of a file, or of every markdown file in a directory
    Header {
        /// File or directory (default: skills_path from config)
        path: Option<PathBuf>,

        /// Also print the document body after the header
        #[arg(long)]
        body: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Day,
    Week,
    Month,
}

impl GroupBy {
    /// The time bucket for period groupings; `None` for categories.
    pub fn granularity(self) -> Option<Granularity> {
        match self {
            Self::Category => None,
            Self::Day => Some(Granularity::Day),
            Self::Week => Some(Granularity::Week),
            Self::Month => Some(Granularity::Month),
        }
    }
}

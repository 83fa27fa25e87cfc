use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Loads a markdown recipe catalogue and extracts its structured data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Configuration file (defaults to _config.yml in the site root)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List a collection, newest first
    #[command(alias = "ls")]
    List {
        /// Collection to list (defaults to the first configured)
        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,

        /// Print the listing as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show an entry's metadata, steps and FAQs as JSON
    Show {
        /// Entry slug
        slug: String,

        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,
    },

    /// Print an entry's JSON-LD script tags
    Schema {
        /// Entry slug
        slug: String,

        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,
    },

    /// List entries sharing tags with an entry
    Related {
        /// Entry slug
        slug: String,

        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,
    },

    /// Report content problems; exits non-zero if any are found
    Check {
        /// Collection to check (defaults to all)
        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,
    },

    /// Quote risky metadata values, then check
    Fix {
        /// Collection to fix (defaults to all)
        #[arg(short, long, value_name = "NAME")]
        collection: Option<String>,

        /// Report what would change without writing
        #[arg(short = 'n', long, default_value_t = false)]
        dry_run: bool,
    },

    /// Write every collection as JSON
    Export {
        /// Output directory (defaults to the configured destination)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_and_command_flags() {
        let cli = Cli::try_parse_from(["recipebook", "--source", "site", "-g", "show", "vlookup", "-c", "insights"]).unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("site")));
        assert!(cli.debug);
        match cli.command {
            Commands::Show { slug, collection } => {
                assert_eq!(slug, "vlookup");
                assert_eq!(collection.as_deref(), Some("insights"));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_fix_dry_run() {
        let cli = Cli::try_parse_from(["recipebook", "fix", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Fix { dry_run: true, collection: None }));
    }

    #[test]
    fn test_debug_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["recipebook", "-g", "-q", "list"]).is_err());
    }
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "golf-catalog")]
#[command(version, about = "Maintain the golf course catalog and seed the app backend")]
pub struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the public facility CSV against the catalog
    Analyze {
        /// Public facility CSV export
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Canonical catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Where to write courses missing from the catalog
        #[arg(long)]
        missing_out: Option<PathBuf>,
    },

    /// Append previously analyzed missing courses to the catalog
    Merge {
        /// Canonical catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Missing courses written by `analyze`
        #[arg(long)]
        missing: Option<PathBuf>,

        /// Backup of the catalog taken before writing
        #[arg(long)]
        backup: Option<PathBuf>,
    },

    /// Write the built-in baseline catalog
    Catalog {
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check that the directory sites respond before writing
        #[arg(long)]
        probe: bool,
    },

    /// Search the catalog by region and name, city or address
    Search {
        /// Canonical catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Region label such as 경기 (전체 for all)
        #[arg(short, long)]
        region: Option<String>,

        /// Case-insensitive text to look for
        query: Option<String>,
    },

    /// Show the region distribution of the catalog
    Stats {
        /// Canonical catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a SQLite database
    Export {
        /// Canonical catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output SQLite database path
        output_db: PathBuf,
    },

    /// Populate the backend with demo data
    Seed {
        #[command(subcommand)]
        step: SeedStep,
    },

    /// List regions and the address patterns that select them
    Regions,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    /// Accounts, profiles, group postings and wallets
    Profiles(SeedArgs),
    /// Friends, applications, chats, notifications, reviews, scores and likes
    Relationships(SeedArgs),
    /// Profiles, then relationships
    All(SeedArgs),
}

impl SeedStep {
    pub fn args(&self) -> SeedArgs {
        match self {
            SeedStep::Profiles(args) | SeedStep::Relationships(args) | SeedStep::All(args) => *args,
        }
    }

    pub fn runs_profiles(&self) -> bool {
        matches!(self, SeedStep::Profiles(_) | SeedStep::All(_))
    }

    pub fn runs_relationships(&self) -> bool {
        matches!(self, SeedStep::Relationships(_) | SeedStep::All(_))
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedArgs {
    /// Show the full-screen dashboard
    #[arg(long)]
    pub tui: bool,

    /// Seed for reproducible random choices
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_all() {
        let cli = Cli::try_parse_from(["golf-catalog", "seed", "all", "--rng-seed", "7"]).unwrap();
        match cli.command {
            Commands::Seed { step } => {
                assert!(step.runs_profiles() && step.runs_relationships());
                assert_eq!(step.args().rng_seed, Some(7));
                assert!(!step.args().tui);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_with_global_config() {
        let cli = Cli::try_parse_from([
            "golf-catalog",
            "search",
            "--region",
            "경기",
            "sky",
            "--config",
            "/tmp/c.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
        match cli.command {
            Commands::Search { region, query, .. } => {
                assert_eq!(region.as_deref(), Some("경기"));
                assert_eq!(query.as_deref(), Some("sky"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["golf-catalog", "export"]).is_err());
    }
}

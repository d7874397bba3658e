use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agriops", version, about = "Offline agronomy advisory TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config, catalog, and preference store
    Check,
    /// Print recommendations for a month and region without the TUI
    Advise {
        /// Calendar month 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Region to classify against (defaults to the configured region)
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advise_month_accepts_calendar_range() {
        let cli = Cli::try_parse_from(["agriops", "advise", "--month", "6"]).unwrap();
        match cli.command {
            Some(Commands::Advise { month, .. }) => assert_eq!(month, Some(6)),
            _ => panic!("expected advise subcommand"),
        }
    }

    #[test]
    fn advise_month_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["agriops", "advise", "--month", "0"]).is_err());
        assert!(Cli::try_parse_from(["agriops", "advise", "--month", "13"]).is_err());
        assert!(Cli::try_parse_from(["agriops", "advise", "--month", "25"]).is_err());
    }
}

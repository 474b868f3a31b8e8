use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eikana_core::SearchMode;

#[derive(Debug, Parser)]
#[clap(
    name = "eikana",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    arg_required_else_help = true
)]
pub struct Cli {
    /// Dictionary file to use instead of the download cache
    #[arg(long, global = true)]
    pub dict: Option<PathBuf>,

    /// Never download; use the cached dictionary or the built-in sample
    #[arg(long, global = true)]
    pub offline: bool,

    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert English text to katakana
    #[clap(arg_required_else_help = true)]
    Convert(ConvertArgs),

    /// Index keys starting with a prefix
    #[clap(arg_required_else_help = true)]
    Suggest(SuggestArgs),

    /// Re-download the dictionary and rebuild the index
    Update(UpdateArgs),

    /// Index statistics
    Stats(StatsArgs),
}

#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Words to convert, joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,

    /// strict, normal or broad
    #[arg(short, long)]
    pub mode: Option<SearchMode>,

    /// Fall back to approximate matching when nothing matches directly
    #[arg(short, long)]
    pub fuzzy: bool,

    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct SuggestArgs {
    pub partial: String,

    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct UpdateArgs {
    /// Download even when a cached copy exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, clap::Args)]
pub struct StatsArgs {
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from([
            "eikana", "convert", "ice", "cream", "--mode", "broad", "--fuzzy", "-n", "3",
        ])
        .unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.text, vec!["ice", "cream"]);
                assert_eq!(args.mode, Some(SearchMode::Broad));
                assert!(args.fuzzy);
                assert_eq!(args.max_results, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["eikana", "stats", "--dict", "/tmp/d.json", "--offline"]).unwrap();
        assert_eq!(cli.dict, Some(PathBuf::from("/tmp/d.json")));
        assert!(cli.offline);
    }

    #[test]
    fn test_invalid_mode_lists_valid_ones() {
        let err = Cli::try_parse_from(["eikana", "convert", "x", "--mode", "loose"]).unwrap_err();
        assert!(err.to_string().contains("strict, normal, broad"));
    }

    #[test]
    fn test_convert_requires_text() {
        assert!(Cli::try_parse_from(["eikana", "convert", "--fuzzy"]).is_err());
    }
}

//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "allowlist-filter")]
#[command(
    author,
    version,
    about = "Update an allowlist file by removing specified IP addresses"
)]
pub struct Cli {
    /// Path to the allowlist file (default: allow_list.txt)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// IP address to remove (repeat this flag to remove multiple IPs)
    #[arg(long, value_name = "IP")]
    pub remove: Vec<String>,

    /// Optional output file. If omitted, updates in-place
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Create a small demo allow_list.txt and run an example update
    #[arg(long)]
    pub demo: bool,

    /// Replace the destination atomically (temp file + rename)
    #[arg(long)]
    pub atomic: bool,

    /// Config file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["allowlist-filter"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.remove.is_empty());
        assert!(cli.output.is_none());
        assert!(!cli.demo);
        assert!(!cli.atomic);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_repeated_remove() {
        let cli = Cli::try_parse_from([
            "allowlist-filter",
            "--input",
            "lists/allow.txt",
            "--remove",
            "10.0.0.1",
            "--remove",
            "10.0.0.2",
            "--output",
            "lists/allow.new",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("lists/allow.txt")));
        assert_eq!(cli.remove, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(cli.output, Some(PathBuf::from("lists/allow.new")));
    }

    #[test]
    fn test_cli_demo_and_global_options() {
        let cli = Cli::try_parse_from([
            "allowlist-filter",
            "--demo",
            "--atomic",
            "-v",
            "--config",
            "/custom/path.yaml",
        ])
        .unwrap();
        assert!(cli.demo);
        assert!(cli.atomic);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/path.yaml")));
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["allowlist-filter", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_remove_requires_value() {
        assert!(Cli::try_parse_from(["allowlist-filter", "--remove"]).is_err());
    }
}

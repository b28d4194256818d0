//! Command-line argument parsing
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ProfileTwin - Chat with an AI digital twin built from your professional profile
#[derive(Parser, Debug)]
#[command(name = "profiletwin")]
#[command(version)]
#[command(about = "Chat with an AI digital twin built from your professional profile", long_about = None)]
pub struct Args {
    /// Path to the profile document (overrides the config file)
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Completion model to use (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Results retrieved per question (overrides the config file)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (show retrieval hits)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive chat session (default)
    Chat,

    /// Show vector index statistics
    Info,

    /// Display the resolved configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

impl Verbosity {
    /// Check if progress output should be shown
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if retrieval hits should be shown per question
    pub fn show_hits(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> Args {
        Args {
            profile: None,
            model: None,
            top_k: None,
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(args(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(args(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args(2, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args(0, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        assert_eq!(args(2, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_hits());
        assert!(Verbosity::Verbose.show_hits());
    }

    #[test]
    fn test_parses_without_arguments() {
        let args = Args::parse_from(["profiletwin"]);
        assert!(args.command.is_none());
        assert!(args.profile.is_none());
    }

    #[test]
    fn test_parses_overrides() {
        let args = Args::parse_from([
            "profiletwin",
            "--profile",
            "me.json",
            "--model",
            "llama-3.3-70b-versatile",
            "--top-k",
            "5",
        ]);
        assert_eq!(args.profile, Some(PathBuf::from("me.json")));
        assert_eq!(args.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(args.top_k, Some(5));
    }

    #[test]
    fn test_parses_subcommand() {
        let args = Args::parse_from(["profiletwin", "info"]);
        assert!(matches!(args.command, Some(Commands::Info)));
    }
}

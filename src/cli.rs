// src/cli.rs

use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::similarity::Metric;
use clap::{Args, Parser, Subcommand};

/// Measures how similar two GitHub repositories are at the source level.
///
/// reposim downloads a bounded number of code files from each repository,
/// strips comments and whitespace noise, and compares files that share a name
/// using a length-normalized edit distance. It can also snapshot a single
/// repository or search GitHub for repositories that look alike.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Base URL of the GitHub REST API.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// GitHub access token. Falls back to the GITHUB_TOKEN environment variable.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Number of code files fetched per repository.
    #[arg(short = 'm', long, global = true, value_name = "COUNT")]
    pub max_files: Option<usize>,

    /// Print the report as JSON instead of text.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the code of two repositories.
    Compare {
        /// First repository, as a URL or owner/name.
        repo1: String,

        /// Second repository, as a URL or owner/name.
        repo2: String,

        /// Scoring function applied to each file pair.
        #[arg(long, value_enum, default_value_t = Metric::Levenshtein)]
        metric: Metric,

        /// Compare raw content without stripping comments and whitespace.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_normalize: bool,
    },

    /// Download the code files of one repository.
    Fetch {
        /// Repository, as a URL or owner/name.
        repo: String,

        /// Branch to read instead of the repository's default branch.
        #[arg(short, long, value_name = "BRANCH")]
        branch: Option<String>,
    },

    /// Search GitHub for repositories similar to a given one.
    Similar {
        /// Repository, as a URL or owner/name.
        repo: String,

        /// Search terms to use instead of the repository's description (repeatable).
        #[arg(short = 'k', long = "keyword", value_name = "WORD")]
        keywords: Vec<String>,

        /// Language qualifier. Defaults to the repository's own language.
        #[arg(short, long)]
        language: Option<String>,

        /// Maximum number of repositories to list.
        #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Serve the JSON API over HTTP.
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

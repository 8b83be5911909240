// src/main.rs

use anyhow::Result;
use clap::Parser;
use reposim::cli::{Cli, Commands};
use reposim::config::ConfigBuilder;
use reposim::errors::Error;
use reposim::github::{find_similar_repositories, GitHubClient, SearchOptions};
use reposim::output::{self, OutputFormat};
#[cfg(feature = "progress")]
use reposim::progress::IndicatifProgress;
use reposim::progress::ProgressReporter;
use reposim::similarity::MatchOptions;
use reposim::{compare_repositories, fetch_repository};
use std::io::Write;

#[cfg(feature = "web")]
use reposim::web;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "reposim=debug".parse()?
                } else {
                    "reposim=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting reposim v{}...", env!("CARGO_PKG_VERSION"));

    // Panic hook that keeps build paths out of user-facing messages
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "Box<Any>",
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    // --- Setup ---
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.global.json);

    let config = ConfigBuilder::from_cli(&cli.global).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    // --- Handle Subcommands (Web Server) ---
    #[cfg(feature = "web")]
    if let Commands::Serve { port } = &cli.command {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(web::start_server(*port, config));
    }

    // Decide whether to show a progress bar. Show it if stderr is a TTY.
    let progress_reporter: Option<Box<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Box::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };
    let progress = progress_reporter.as_deref();

    // --- Execution ---
    let max_files = config.max_files;
    let client = GitHubClient::new(config)?;
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    let result = match cli.command {
        Commands::Compare {
            repo1,
            repo2,
            metric,
            no_normalize,
        } => {
            let options = MatchOptions {
                normalize: !no_normalize,
                metric,
            };
            compare_repositories(&client, &repo1, &repo2, max_files, &options, progress).and_then(
                |report| {
                    finish(progress, "Comparison complete.");
                    output::write_comparison(&mut writer, &report, format)
                },
            )
        }
        Commands::Fetch { repo, branch } => {
            fetch_repository(&client, &repo, branch.as_deref(), max_files, progress).and_then(
                |snapshot| {
                    finish(progress, "Fetch complete.");
                    output::write_snapshot(&mut writer, &snapshot, format)
                },
            )
        }
        Commands::Similar {
            repo,
            keywords,
            language,
            limit,
        } => {
            let options = SearchOptions {
                keywords,
                language,
                limit,
            };
            find_similar_repositories(&client, &repo, &options)
                .and_then(|similar| output::write_similar(&mut writer, &similar, format))
        }
        #[cfg(feature = "web")]
        Commands::Serve { .. } => Ok(()),
    };
    writer.flush()?;

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::InvalidReferenceFormat(_) => {
                eprintln!("Error: {}", e);
                eprintln!("Expected a GitHub URL or owner/name, e.g. rust-lang/cargo.");
                std::process::exit(2);
            }
            Error::RateLimited { .. } => {
                eprintln!("Error: {}", e);
                eprintln!("Try again later, or pass --token / set GITHUB_TOKEN.");
                std::process::exit(1);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn finish(progress: Option<&dyn ProgressReporter>, msg: &str) {
    if let Some(p) = progress {
        p.finish_with_message(msg.to_string());
    }
}

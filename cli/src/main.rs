//! CLI for release-docs.
//!
//! Generates the milestone changelog from merged pull requests and keeps the
//! checksum-guarded README in sync with its template.

use clap::{Parser, Subcommand};
use release_docs::{
    ChangelogSummary, ReadmeSummary, ReadmeUpdateRequest, ResolvedDependency, Runner,
    RunnerConfig, RunnerError, DEFAULT_CONFIG_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Release documentation tooling: changelog generation and README checksums.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file, relative to the project root.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Project root.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Writes the changelog for the configured milestone.
    GenerateChangelog {
        /// GitHub Personal Access Token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Fails if the README was edited without updating its template.
    VerifyReadme,

    /// Regenerates the README from its template. The README must match its digest.
    UpdateReadme(ReadmeArgs),

    /// Generates the README and its digest when neither exists yet.
    InitReadme(ReadmeArgs),
}

#[derive(clap::Args, Debug)]
struct ReadmeArgs {
    /// Project version substituted for `{{version}}`.
    #[arg(long)]
    version: String,

    /// Resolved dependency as `group:name:version`. Repeatable.
    #[arg(long = "dependency", value_name = "GROUP:NAME:VERSION")]
    dependencies: Vec<ResolvedDependency>,
}

impl From<ReadmeArgs> for ReadmeUpdateRequest {
    fn from(args: ReadmeArgs) -> Self {
        Self {
            version: args.version,
            dependencies: args.dependencies,
        }
    }
}

/// What a successful run produced.
enum Outcome {
    Changelog(String, ChangelogSummary),
    Readme(ReadmeSummary),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    // Both aws-lc-rs and ring may be linked in; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with compact output filtered by `RUST_LOG` (default "info").
///
/// Logs go to stderr so the rendered changelog on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run(args: Args) -> Result<Outcome, RunnerError> {
    let config = RunnerConfig::load(args.root, &args.config)?;

    match args.command {
        Command::GenerateChangelog { token } => {
            let runner = Runner::new(config.with_token(token));
            let (document, summary) = runner.generate_changelog().await?;
            Ok(Outcome::Changelog(document.render(), summary))
        }
        Command::VerifyReadme => {
            let runner = Runner::new(config);
            Ok(Outcome::Readme(runner.verify_readme()?))
        }
        Command::UpdateReadme(args) => {
            let runner = Runner::new(config);
            Ok(Outcome::Readme(runner.update_readme(&args.into())?))
        }
        Command::InitReadme(args) => {
            let runner = Runner::new(config);
            Ok(Outcome::Readme(runner.init_readme(&args.into())?))
        }
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Changelog(rendered, summary) => {
            print!("{rendered}");
            println!("\nSummary:");
            println!("  Written to: {}", summary.output.display());
            println!("  Pull requests found: {}", summary.pull_requests_found);
            println!("  Pull requests excluded: {}", summary.pull_requests_excluded);
            println!("  Improvements: {}", summary.improvements);
            println!("  Bugfixes: {}", summary.bugfixes);
            println!("  Breaking changes: {}", summary.breaking_changes);
            if summary.has_unclassified() {
                println!("  Without changelog section: {}", summary.unclassified);
            }
        }
        Outcome::Readme(summary) => {
            println!("Summary:");
            println!(
                "  {}: {}",
                if summary.regenerated {
                    "Regenerated"
                } else {
                    "Verified"
                },
                summary.output.display()
            );
            println!("  Digest: {}", summary.digest);
            if !summary.unresolved_placeholders.is_empty() {
                println!(
                    "  Unresolved placeholders: {}",
                    summary.unresolved_placeholders.join(", ")
                );
            }
        }
    }
}

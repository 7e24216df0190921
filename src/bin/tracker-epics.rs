//! Tracker epics CLI - create the next release or hotfix epic.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tracker_epics::planner::{Action, EpicOutcome, ReleasePlanner};
use tracker_epics::tracker::{TrackerClient, TrackerConfig};

/// Tracker epics CLI - release planning automation.
#[derive(Parser)]
#[command(name = "tracker-epics")]
#[command(about = "Create release and hotfix epics from the latest version")]
struct Cli {
    /// Tracker API token (or set `TRACKER_TOKEN` env var).
    #[arg(long, env = "TRACKER_TOKEN")]
    token: String,

    /// User ID owning created release stories (or set `TRACKER_USER_ID`).
    #[arg(long, env = "TRACKER_USER_ID")]
    user_id: u64,

    /// Project ID (or set `TRACKER_PROJECT_ID`).
    #[arg(long, env = "TRACKER_PROJECT_ID")]
    project_id: u64,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Action to perform.
    action: CliAction,
}

/// The two planning actions, spelled the way operators invoke them.
#[derive(Clone, Copy, ValueEnum)]
enum CliAction {
    /// Create an epic for the next release (minor bump).
    #[value(name = "epic_next_release")]
    EpicNextRelease,

    /// Create an epic for the next hotfix (patch bump).
    #[value(name = "epic_next_hotfix")]
    EpicNextHotfix,
}

impl From<CliAction> for Action {
    fn from(action: CliAction) -> Self {
        match action {
            CliAction::EpicNextRelease => Self::NextRelease,
            CliAction::EpicNextHotfix => Self::NextHotfix,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = TrackerClient::new(TrackerConfig {
        token: cli.token,
        user_id: cli.user_id,
        project_id: cli.project_id,
    })
    .context("Failed to create tracker client")?;

    let planner = ReleasePlanner::new(client, cli.user_id);
    let outcome = planner.run(cli.action.into()).await?;

    match outcome {
        EpicOutcome::Created {
            version,
            epic,
            story,
        } => {
            println!("Created epic for version {version}: {}", epic.url);
            println!("Created release story: {}", story.name);
        }
        EpicOutcome::AlreadyExists { version, epic } => {
            println!("There is already an epic for version {version}: {}", epic.url);
        }
    }

    Ok(())
}

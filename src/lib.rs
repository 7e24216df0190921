//! Release and hotfix epic automation for Tracker projects.
//!
//! This crate infers the next semantic version from the names of existing
//! release epics and creates the matching epic (plus its release story) in
//! the tracker.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracker_epics::planner::{Action, ReleasePlanner};
//! use tracker_epics::tracker::{TrackerClient, TrackerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TrackerClient::new(TrackerConfig {
//!         token: "token".into(),
//!         user_id: 42,
//!         project_id: 99,
//!     })?;
//!
//!     let planner = ReleasePlanner::new(client, 42);
//!     let outcome = planner.run(Action::NextRelease).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod planner;
pub mod tracker;
pub mod version;

pub use planner::{Action, EpicOutcome, ReleasePlanner};
pub use tracker::{Epic, EpicRepository, Label, Story, TrackerClient, TrackerConfig, TrackerError};
pub use version::Version;

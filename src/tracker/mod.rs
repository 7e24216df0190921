//! Tracker API boundary.
//!
//! The release planner consumes the [`EpicRepository`] trait; the
//! [`TrackerClient`] implements it against the tracker's v5 REST API.

mod client;
mod models;
mod traits;

pub use client::TrackerClient;
pub use traits::{Epic, EpicRepository, Label, Story, TrackerConfig, TrackerError};

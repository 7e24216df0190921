//! Repository trait and common types for the Tracker API boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// Errors that can occur talking to the tracker service.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A name required to contain a semantic version did not.
    #[error("No version found in {0:?}")]
    VersionParse(String),
}

/// Credentials and addressing for a tracker project.
///
/// Passed to the client at construction time; nothing in the crate reads
/// these from ambient process state.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// API access token, sent as the `X-TrackerToken` header.
    pub token: String,
    /// User who owns and requests created release stories.
    pub user_id: u64,
    /// Project the epics and stories belong to.
    pub project_id: u64,
}

/// An epic in the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    /// Unique epic identifier.
    pub id: u64,
    /// Epic name, e.g. `"Release v2.4.1"`.
    pub name: String,
    /// Web URL of the epic.
    pub url: String,
    /// Version label attached to the epic, when present.
    pub label: Option<Label>,
}

/// A label attached to epics and stories, encoding a version as `v1.2.3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Unique label identifier.
    pub id: u64,
    /// Label name.
    pub name: String,
}

/// A story in the tracker; this tool only creates release-type stories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Unique story identifier.
    pub id: u64,
    /// Story name.
    pub name: String,
    /// Story type, `"release"` for stories created here.
    pub story_type: String,
}

/// Trait for the tracker operations the release planner consumes.
#[async_trait]
pub trait EpicRepository: Send + Sync {
    /// List epics whose name matches the server-side "release" filter.
    /// A single page of results; projects with more epics than one page
    /// returns will under-report.
    async fn list_release_epics(&self) -> Result<Vec<Epic>, TrackerError>;

    /// Look up an existing epic for a version. Used as the existence check
    /// before creating a new one.
    async fn find_epic_by_version(&self, version: Version) -> Result<Option<Epic>, TrackerError>;

    /// Create an epic tagged with a version label.
    async fn create_epic(&self, name: &str, label_name: &str) -> Result<Epic, TrackerError>;

    /// Create a release-type story labeled with the version, owned by and
    /// requested by the given users.
    async fn create_release_story(
        &self,
        version: Version,
        owner_id: u64,
        requester_id: u64,
    ) -> Result<Story, TrackerError>;

    /// Look up the label named `v<version>` in the project, if any.
    async fn find_version_label(&self, version: Version) -> Result<Option<Label>, TrackerError>;
}
